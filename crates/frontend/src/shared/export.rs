/// CSV export of list data through a browser download.
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be written out as CSV report rows.
pub trait CsvExport {
    /// Column headers, in output order.
    fn headers() -> Vec<&'static str>;

    /// One row; `index` is the zero-based position in the exported list
    /// (the report's running-number column is 1-based).
    fn csv_row(&self, index: usize) -> Vec<String>;
}

/// Build the CSV text: header line plus one line per row, comma-delimited.
///
/// Fields are written verbatim, without quoting or escaping; a name that
/// contains a comma shifts the remaining columns. That is the report's
/// long-standing wire format and consumers rely on it byte for byte.
pub fn build_csv<T: CsvExport>(rows: &[T]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(T::headers().join(","));
    for (index, row) in rows.iter().enumerate() {
        lines.push(row.csv_row(index).join(","));
    }
    lines.join("\n")
}

/// Generate the CSV and trigger a download under the given filename.
pub fn export_csv<T: CsvExport>(rows: &[T], filename: &str) -> Result<(), String> {
    let content = build_csv(rows);
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Download through a temporary hidden anchor element.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: String,
        kg: f64,
    }

    impl CsvExport for Line {
        fn headers() -> Vec<&'static str> {
            vec!["ลำดับ", "ชื่อ", "จำนวน (กก.)"]
        }

        fn csv_row(&self, index: usize) -> Vec<String> {
            vec![(index + 1).to_string(), self.name.clone(), self.kg.to_string()]
        }
    }

    #[test]
    fn builds_header_and_numbered_rows() {
        let rows = vec![
            Line { name: "คะน้า".to_string(), kg: 12.0 },
            Line { name: "ผักบุ้ง".to_string(), kg: 7.5 },
        ];
        let csv = build_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ลำดับ,ชื่อ,จำนวน (กก.)");
        assert_eq!(lines[1], "1,คะน้า,12");
        assert_eq!(lines[2], "2,ผักบุ้ง,7.5");
    }

    #[test]
    fn fields_are_written_verbatim() {
        let rows = vec![Line { name: "a,b".to_string(), kg: 1.0 }];
        let csv = build_csv(&rows);
        // no quoting: the embedded comma passes straight through
        assert!(csv.ends_with("1,a,b,1"));
    }
}
