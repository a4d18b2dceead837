//! Box-drawing dumps of tree shapes.

/// Renders one child given the indentation its continuation lines carry.
pub type PrintChild<'a> = dyn Fn(&str) -> String + 'a;

/// Renders `children` as branches hanging under the current line.
///
/// Trailing `None` entries are dropped; inner ones leave no line. A child
/// rendering to an empty string is drawn as a bare `│` connector.
pub fn print_tree(tab: &str, children: &[Option<&PrintChild<'_>>]) -> String {
    let mut out = String::new();
    let Some(last) = children.iter().rposition(Option::is_some) else {
        return out;
    };

    for (i, child) in children.iter().enumerate().take(last + 1) {
        let Some(child) = child else {
            continue;
        };

        let is_last = i == last;
        let child_tab = format!("{tab}{}  ", if is_last { " " } else { "│" });
        let rendered = child(&child_tab);
        let branch = if rendered.is_empty() {
            "│"
        } else if is_last {
            "└─"
        } else {
            "├─"
        };

        out.push('\n');
        out.push_str(tab);
        out.push_str(branch);
        if !rendered.is_empty() {
            out.push(' ');
            out.push_str(&rendered);
        }
    }

    out
}
