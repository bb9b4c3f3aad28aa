/// A labelled input box.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    pub label: &'a str,
    pub value: &'a str,
    /// Text that was typed and turned away. The box keeps `value`.
    pub rejected: Option<&'a str>,
}

impl<'a> Input<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            rejected: None,
        }
    }

    pub fn rejected(mut self, rejected: Option<&'a str>) -> Self {
        self.rejected = rejected;
        self
    }

    /// `Label  [ value ]`, padded so labels line up.
    pub fn render(&self, label_width: usize) -> String {
        let mut line = format!("{:<label_width$}  [ {} ]", self.label, self.value);
        if let Some(rejected) = self.rejected {
            line.push_str(&format!("  ✗ invalid: {rejected}"));
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_label_and_value() {
        let input = Input::new("Amount", "12.50");
        assert_eq!(input.render(6), "Amount  [ 12.50 ]");
    }

    #[test]
    fn pads_label() {
        let input = Input::new("Amt", "1");
        assert_eq!(input.render(6), "Amt     [ 1 ]");
    }

    #[test]
    fn shows_rejected_text_after_kept_value() {
        let input = Input::new("Amount", "12.50").rejected(Some("1.234"));
        assert_eq!(input.render(6), "Amount  [ 12.50 ]  ✗ invalid: 1.234");
    }

    #[test]
    fn no_marker_without_rejection() {
        let input = Input::new("Amount", "12.50").rejected(None);
        assert!(!input.render(6).contains('✗'));
    }
}
