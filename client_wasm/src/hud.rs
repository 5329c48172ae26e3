//! DOM text overlay on top of the WebGPU canvas

use game_core::Anchor;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};
use wasm_bindgen::JsCast;

use crate::error::ClientError;
use crate::scene::TextItem;

pub struct Hud {
    document: Document,
    root: HtmlElement,
    shown: Vec<TextItem>,
}

impl Hud {
    /// Create the overlay container as a sibling of the canvas, covering it exactly
    pub fn new(document: Document, canvas: &HtmlCanvasElement) -> Result<Self, ClientError> {
        let root: HtmlElement = document
            .create_element("div")
            .map_err(ClientError::dom)?
            .dyn_into()
            .map_err(|_| ClientError::Dom("overlay is not an HtmlElement".into()))?;

        let style = root.style();
        for (name, value) in [
            ("position", "absolute".to_string()),
            ("left", format!("{}px", canvas.offset_left())),
            ("top", format!("{}px", canvas.offset_top())),
            ("width", format!("{}px", canvas.width())),
            ("height", format!("{}px", canvas.height())),
            ("pointer-events", "none".to_string()),
            ("overflow", "hidden".to_string()),
            ("font-family", "Arial, sans-serif".to_string()),
        ] {
            style.set_property(name, &value).map_err(ClientError::dom)?;
        }

        let parent = canvas
            .parent_node()
            .ok_or_else(|| ClientError::Dom("canvas has no parent".into()))?;
        parent.append_child(&root).map_err(ClientError::dom)?;

        Ok(Self {
            document,
            root,
            shown: Vec::new(),
        })
    }

    /// Replace the overlay contents if the text differs from what is shown
    pub fn update(&mut self, texts: &[TextItem]) -> Result<(), ClientError> {
        if self.shown.as_slice() == texts {
            return Ok(());
        }

        self.root.set_inner_html("");
        for item in texts {
            let node = self.text_node(item)?;
            self.root.append_child(&node).map_err(ClientError::dom)?;
        }
        self.shown = texts.to_vec();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.root.set_inner_html("");
        self.shown.clear();
    }

    fn text_node(&self, item: &TextItem) -> Result<HtmlElement, ClientError> {
        let node: HtmlElement = self
            .document
            .create_element("div")
            .map_err(ClientError::dom)?
            .dyn_into()
            .map_err(|_| ClientError::Dom("text node is not an HtmlElement".into()))?;
        node.set_text_content(Some(&item.text));

        let [r, g, b, a] = item.color;
        let transform = match item.anchor {
            Anchor::TopLeft => "none",
            Anchor::Center => "translate(-50%, -50%)",
        };

        let style = node.style();
        for (name, value) in [
            ("position", "absolute".to_string()),
            ("left", format!("{}px", item.pos.x)),
            ("top", format!("{}px", item.pos.y)),
            ("font-size", format!("{}px", item.size)),
            ("line-height", "1".to_string()),
            ("white-space", "nowrap".to_string()),
            ("transform", transform.to_string()),
            (
                "color",
                format!(
                    "rgba({}, {}, {}, {})",
                    (r * 255.0).round(),
                    (g * 255.0).round(),
                    (b * 255.0).round(),
                    a
                ),
            ),
        ] {
            style.set_property(name, &value).map_err(ClientError::dom)?;
        }
        Ok(node)
    }
}
