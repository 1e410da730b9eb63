use serde::{Deserialize, Serialize};

/// Delivery status of one order detail line.
///
/// The backend stores the English codes; the UI always renders the Thai
/// labels. Anything the backend sends outside these two codes is treated as
/// still pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Complete,
}

impl DeliveryStatus {
    pub fn code(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "Pending",
            DeliveryStatus::Complete => "Complete",
        }
    }

    pub fn label_thai(&self) -> &'static str {
        match self {
            DeliveryStatus::Pending => "รอดำเนินการ",
            DeliveryStatus::Complete => "เสร็จสิ้น",
        }
    }

    pub fn all() -> Vec<DeliveryStatus> {
        vec![DeliveryStatus::Pending, DeliveryStatus::Complete]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Pending" => Some(DeliveryStatus::Pending),
            "Complete" => Some(DeliveryStatus::Complete),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trips() {
        for status in DeliveryStatus::all() {
            assert_eq!(DeliveryStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn unknown_code_is_none() {
        assert_eq!(DeliveryStatus::from_code("Shipped"), None);
    }
}
