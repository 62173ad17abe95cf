use lopdf::{Document as LopdfDocument, Object};

/// Extract all text content from a PDF document, page by page in order.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        if let Ok(page_text) = doc.extract_text(&[page_num as u32]) {
            text.push_str(&page_text);
            text.push('\n');
        }
    }
    text
}

/// Text content of a single page (1-based).
pub fn page_text(doc: &LopdfDocument, page_num: u32) -> String {
    doc.extract_text(&[page_num]).unwrap_or_default()
}

/// A URI link annotation found in the document.
#[derive(Debug, Clone)]
pub struct FoundLink {
    pub page: u32,
    pub rect: [f32; 4],
    pub uri: String,
}

/// Walk every page's Annots array and collect the URI link annotations.
pub fn link_annotations(doc: &LopdfDocument) -> Vec<FoundLink> {
    let mut links = Vec::new();
    for (page_num, page_id) in doc.get_pages() {
        let Ok(page_dict) = doc.get_object(page_id).and_then(|obj| obj.as_dict()) else {
            continue;
        };
        let Ok(annots) = page_dict.get(b"Annots").and_then(|obj| obj.as_array()) else {
            continue;
        };
        for entry in annots {
            if let Some(link) = resolve_link(doc, entry, page_num) {
                links.push(link);
            }
        }
    }
    links
}

fn resolve_link(doc: &LopdfDocument, entry: &Object, page: u32) -> Option<FoundLink> {
    let annot = doc.get_object(entry.as_reference().ok()?).ok()?.as_dict().ok()?;
    if annot.get(b"Subtype").ok()?.as_name().ok()? != b"Link" {
        return None;
    }
    let rect_array = annot.get(b"Rect").ok()?.as_array().ok()?;
    if rect_array.len() != 4 {
        return None;
    }
    let mut rect = [0.0f32; 4];
    for (slot, value) in rect.iter_mut().zip(rect_array) {
        *slot = value.as_f32().ok()?;
    }
    let action = doc
        .get_object(annot.get(b"A").ok()?.as_reference().ok()?)
        .ok()?
        .as_dict()
        .ok()?;
    let uri = match action.get(b"URI").ok()? {
        Object::String(bytes, _) => String::from_utf8_lossy(bytes).to_string(),
        _ => return None,
    };
    Some(FoundLink { page, rect, uri })
}

/// BaseFont names referenced by the document's page resources.
pub fn font_base_names(doc: &LopdfDocument) -> Vec<String> {
    let mut names = std::collections::BTreeSet::new();
    for (_page_num, page_id) in doc.get_pages() {
        let Ok(page_dict) = doc.get_object(page_id).and_then(|obj| obj.as_dict()) else {
            continue;
        };
        let Ok(resources) = page_dict.get(b"Resources") else {
            continue;
        };
        let resources_dict = match resources {
            Object::Reference(id) => {
                let Ok(dict) = doc.get_object(*id).and_then(|obj| obj.as_dict()) else {
                    continue;
                };
                dict
            }
            Object::Dictionary(dict) => dict,
            _ => continue,
        };
        let Ok(fonts) = resources_dict.get(b"Font").and_then(|obj| obj.as_dict()) else {
            continue;
        };
        for (_tag, font) in fonts.iter() {
            let font_dict = match font {
                Object::Reference(id) => doc.get_object(*id).ok().and_then(|o| o.as_dict().ok()),
                Object::Dictionary(dict) => Some(dict),
                _ => None,
            };
            if let Some(font_dict) = font_dict {
                if let Ok(base) = font_dict.get(b"BaseFont").and_then(|obj| obj.as_name()) {
                    names.insert(String::from_utf8_lossy(base).to_string());
                }
            }
        }
    }
    names.into_iter().collect()
}

/// Byte offsets of every occurrence of `needle` in `haystack`.
pub fn occurrence_indices(haystack: &str, needle: &str) -> Vec<usize> {
    haystack.match_indices(needle).map(|(i, _)| i).collect()
}
