//! Server-rendered HTML. Every dynamic value passes through `esc` or `attr`.

pub mod errors;
pub mod forms;
pub mod home;
pub mod layout;
pub mod messages;
pub mod users;

pub(crate) fn esc(s: &str) -> String {
    htmlescape::encode_minimal(s)
}

pub(crate) fn attr(s: &str) -> String {
    htmlescape::encode_attribute(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(esc("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
        assert!(!attr("\" onmouseover=\"x").contains('"'));
    }
}
