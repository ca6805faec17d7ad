use anyhow::Result;
use lol_html::html_content::{ContentType, Element};
use lol_html::{ElementContentHandlers, HtmlRewriter, Selector, Settings};
use std::borrow::Cow;

/// A wrapper for Html modifications, and rewrites.
///
/// Selectors arrive pre-parsed; the config layer turns user input into [`Selector`]s.
#[derive(Debug)]
pub struct Document(Vec<u8>);

impl AsRef<[u8]> for Document {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Document {
    /// Create a new document
    ///
    /// Note: if this is not a valid HTML document, it will fail later on.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self(data.into())
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }

    #[inline]
    fn default_settings() -> Settings<'static, 'static> {
        Settings {
            ..Settings::default()
        }
    }

    /// Run a mutating handler for the provided selector.
    ///
    /// The content of the document will be replaced with the output of the operation.
    pub fn select_mut(
        &mut self,
        selector: &Selector,
        mut call: impl FnMut(&mut Element<'_, '_>) -> Result<()>,
    ) -> Result<()> {
        let mut buf = Vec::new();
        HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![(
                    Cow::Borrowed(selector),
                    ElementContentHandlers::default().element(|x| {
                        call(x)?;
                        Ok(())
                    }),
                )],
                ..Self::default_settings()
            },
            |out: &[u8]| buf.extend_from_slice(out),
        )
        .write(self.0.as_slice())?;

        self.0 = buf;

        Ok(())
    }

    /// Run a non-mutating handler for the provided selector
    ///
    /// To perform modifications on the `Document` use `Document::select_mut`.
    pub fn select(
        &self,
        selector: &Selector,
        mut call: impl FnMut(&Element<'_, '_>),
    ) -> Result<()> {
        HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![(
                    Cow::Borrowed(selector),
                    ElementContentHandlers::default().element(|el| {
                        call(el);
                        Ok(())
                    }),
                )],
                ..Self::default_settings()
            },
            |_: &[u8]| {},
        )
        .write(self.0.as_slice())?;

        Ok(())
    }

    /// Replace the text content of every element matching the selector.
    ///
    /// The text is written escaped; markup inside it stays inert.
    pub fn set_text(&mut self, selector: &Selector, text: &str) -> Result<()> {
        self.select_mut(selector, |el| {
            el.set_inner_content(text, ContentType::Text);
            Ok(())
        })
    }

    /// Number of elements matching the selector.
    pub fn len(&self, selector: &Selector) -> Result<usize> {
        let mut len = 0;
        self.select(selector, |_| len += 1)?;

        Ok(len)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sel(selector: &str) -> Selector {
        selector.parse().expect("selector must parse")
    }

    #[test]
    fn test_set_text() {
        let mut doc = Document::new(
            r#"
<html>
    <body>
        <span id="my-value"></span>
    </body>
</html>
"#,
        );

        doc.set_text(&sel("#my-value"), "pong")
            .expect("not expected to fail");

        let doc = String::from_utf8_lossy(doc.as_ref()).to_string();

        assert_eq!(
            doc,
            r#"
<html>
    <body>
        <span id="my-value">pong</span>
    </body>
</html>
"#
        );
    }

    #[test]
    fn test_set_text_replaces_content() {
        let mut doc = Document::new(r#"<p class="out"><b>old</b></p>"#);

        doc.set_text(&sel(".out"), "new").expect("not expected to fail");

        assert_eq!(
            String::from_utf8_lossy(doc.as_ref()),
            r#"<p class="out">new</p>"#
        );
    }

    #[test]
    fn test_set_text_escapes() {
        let mut doc = Document::new(r#"<span id="my-value"></span>"#);

        doc.set_text(&sel("#my-value"), "<b>&\"bold\"</b>")
            .expect("not expected to fail");

        assert_eq!(
            String::from_utf8_lossy(doc.as_ref()),
            r#"<span id="my-value">&lt;b&gt;&amp;"bold"&lt;/b&gt;</span>"#
        );
    }

    #[test]
    fn test_len() {
        let doc = Document::new(
            r#"<ul><li class="x">1</li><li class="x">2</li><li>3</li></ul>"#,
        );

        assert_eq!(doc.len(&sel("li")).expect("not expected to fail"), 3);
        assert_eq!(doc.len(&sel(".x")).expect("not expected to fail"), 2);
        assert_eq!(doc.len(&sel("#my-value")).expect("not expected to fail"), 0);
    }
}
