/// Read-only text, optionally labelled.
#[derive(Debug, Clone, Copy)]
pub struct Text<'a> {
    pub label: Option<&'a str>,
    pub text: &'a str,
}

impl<'a> Text<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { label: None, text }
    }

    pub fn labelled(label: &'a str, text: &'a str) -> Self {
        Self {
            label: Some(label),
            text,
        }
    }

    pub fn render(&self, label_width: usize) -> String {
        match self.label {
            Some(label) => format!("{label:<label_width$}    {}", self.text),
            None => self.text.to_string(),
        }
    }
}
