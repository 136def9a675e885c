//! Template rendering with Tera

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_template("base.html", include_str!("../../templates/base.html"))?;
        tera.add_raw_template("index.html", include_str!("../../templates/index.html"))?;

        Ok(Self { tera })
    }

    /// Render a template with context
    pub fn render(&self, template: &str, context: &impl Serialize) -> Result<String> {
        let ctx = Context::from_serialize(context)?;
        Ok(self.tera.render(template, &ctx)?)
    }

    /// Render a template with a Tera Context
    pub fn render_with_context(&self, template: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template, context)?)
    }
}

/// Front-end script served at `/static/script.js`
pub const SCRIPT_JS: &str = include_str!("../../static/script.js");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::PresetTable;

    #[test]
    fn test_index_renders_presets() {
        let templates = Templates::new().unwrap();
        let mut ctx = Context::new();
        ctx.insert("title", "Exa Search");
        ctx.insert("default_preset", "general");
        ctx.insert("presets", &PresetTable::default());

        let html = templates.render_with_context("index.html", &ctx).unwrap();
        assert!(html.contains("<title>Exa Search</title>"));
        assert!(html.contains(r#"data-preset="tiktok""#));
        assert!(html.contains(r#"data-preset="general""#));
        assert!(html.contains("Search academic papers"));
        assert!(html.contains("/static/script.js"));
    }

    #[test]
    fn test_render_from_serialize() {
        #[derive(Serialize)]
        struct Page<'a> {
            title: &'a str,
            default_preset: &'a str,
            presets: PresetTable,
        }

        let templates = Templates::new().unwrap();
        let html = templates
            .render(
                "index.html",
                &Page {
                    title: "Custom",
                    default_preset: "general",
                    presets: PresetTable::new(Default::default()),
                },
            )
            .unwrap();
        assert!(html.contains("<title>Custom</title>"));
    }
}
