//! glance-render-html — Render GLANCE DomNode trees to HTML strings
//!
//! Produces static HTML with data-key and data-a_ attributes so a host page
//! can wire events back to reducer actions.

use glance_dom::DomNode;

/// Void elements that must not have closing tags
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input",
    "link", "meta", "param", "source", "track", "wbr",
];

/// Render a DomNode tree to an HTML string.
pub fn render_to_html(node: &DomNode) -> String {
    let mut buf = String::with_capacity(4096);
    write_node(node, &mut buf);
    buf
}

/// Options for rendering a full HTML page.
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub root: DomNode,
    pub scripts: Vec<String>,
    pub styles: Vec<String>,
    pub inline_css: Option<String>,
    pub mount_selector: Option<String>,
    /// Used only when the tree carries no head `<title>`.
    pub title: Option<String>,
    pub description: Option<String>,
}

impl PageOptions {
    pub fn new(root: DomNode) -> Self {
        PageOptions {
            root,
            scripts: Vec::new(),
            styles: Vec::new(),
            inline_css: None,
            mount_selector: None,
            title: None,
            description: None,
        }
    }
}

/// Render a full HTML document around the tree.
pub fn render_page(opts: &PageOptions) -> String {
    let body_html = render_to_html(&opts.root);

    let mut head_extra = String::new();
    extract_head_html(&opts.root, &mut head_extra);
    let extracted_title = extract_title(&opts.root);

    let mut html = String::with_capacity(body_html.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");

    if let Some(title) = extracted_title.as_ref().or(opts.title.as_ref()) {
        html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    }
    if let Some(desc) = &opts.description {
        html.push_str(&format!("<meta name=\"description\" content=\"{}\" />\n", escape_attr(desc)));
    }

    // Head elements other than <title>, which was handled above
    html.push_str(&remove_title_from_head_html(&head_extra));

    if let Some(css) = &opts.inline_css {
        html.push_str(&format!("<style>{}</style>\n", css));
    }
    for href in &opts.styles {
        html.push_str(&format!("<link rel=\"stylesheet\" href=\"{}\" />\n", escape_attr(href)));
    }

    html.push_str("</head>\n<body>\n");

    let mount = opts.mount_selector.as_deref().unwrap_or("#app");
    let id = mount.trim_start_matches('#');
    html.push_str(&format!("<div id=\"{}\">{}</div>\n", escape_attr(id), body_html));

    for src in &opts.scripts {
        html.push_str(&format!("<script src=\"{}\"></script>\n", escape_attr(src)));
    }

    html.push_str("</body>\n</html>");
    html
}

fn write_node(node: &DomNode, buf: &mut String) {
    if node.is_head() {
        return;
    }

    let is_void = VOID_ELEMENTS.contains(&node.tag.as_str());

    buf.push('<');
    buf.push_str(&node.tag);

    if let Some(key) = &node.key {
        buf.push_str(" data-key=\"");
        buf.push_str(&escape_attr(key));
        buf.push('"');
    }

    // BTreeMap iteration keeps attribute order deterministic
    if let Some(attrs) = &node.attrs {
        for (k, v) in attrs {
            buf.push(' ');
            buf.push_str(k);
            buf.push_str("=\"");
            buf.push_str(&escape_attr(v));
            buf.push('"');
        }
    }

    // Event attributes → data-a_ prefix
    if let Some(events) = &node.events {
        for (k, v) in events {
            buf.push_str(" data-a_");
            buf.push_str(k);
            buf.push_str("=\"");
            buf.push_str(&escape_attr(v));
            buf.push('"');
        }
    }

    buf.push('>');

    if is_void {
        return;
    }

    if let Some(text) = &node.text {
        buf.push_str(&escape_html(text));
    }

    for child in node.children_iter() {
        write_node(child, buf);
    }

    buf.push_str("</");
    buf.push_str(&node.tag);
    buf.push('>');
}

/// Extract head-node children and render them as HTML
fn extract_head_html(node: &DomNode, buf: &mut String) {
    if node.is_head() {
        for child in node.children_iter() {
            write_node(child, buf);
        }
        return;
    }
    for child in node.children_iter() {
        extract_head_html(child, buf);
    }
}

/// Extract the text content of a <title> node inside a head node
fn extract_title(node: &DomNode) -> Option<String> {
    if node.is_head() {
        return node
            .children_iter()
            .iter()
            .find(|c| c.tag == "title")
            .and_then(|c| c.text.clone());
    }
    node.children_iter().iter().find_map(extract_title)
}

/// Remove <title>...</title> from already-rendered head HTML to avoid duplicates
fn remove_title_from_head_html(html: &str) -> String {
    let mut result = html.to_string();
    while let Some(start) = result.find("<title>") {
        match result[start..].find("</title>") {
            Some(end) => {
                result = format!("{}{}", &result[..start], &result[start + end + 8..]);
            }
            None => break,
        }
    }
    result
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
