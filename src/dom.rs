use web_sys::{window, Document, HtmlElement, Storage};

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

pub fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok()).flatten()
}

/// Adds or removes a class on `<body>`. Returns false if there is no body.
pub fn set_body_class(class: &str, on: bool) -> bool {
    let Some(body) = body() else {
        return false;
    };
    let classes = body.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if result.is_err() {
        log::warn!("Could not update body class {}", class);
    }
    result.is_ok()
}

pub fn document_hidden() -> bool {
    document().map(|d| d.hidden()).unwrap_or(false)
}
