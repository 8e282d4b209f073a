//! Abstract factory: one factory per theme, each producing a matching set of widgets.

use super::FactoryError;
use tracing::{debug, warn};

pub trait Button: Send + Sync {
    fn render(&self) -> String;
}

pub trait Checkbox: Send + Sync {
    fn render(&self, checked: bool) -> String;
}

/// Produces widgets that belong together.
pub trait WidgetFactory: Send + Sync {
    fn theme(&self) -> &'static str;

    fn create_button(&self, label: &str) -> Box<dyn Button>;

    fn create_checkbox(&self, label: &str) -> Box<dyn Checkbox>;
}

struct LightButton(String);

impl Button for LightButton {
    fn render(&self) -> String {
        format!("( {} )", self.0)
    }
}

struct LightCheckbox(String);

impl Checkbox for LightCheckbox {
    fn render(&self, checked: bool) -> String {
        format!("[{}] {}", if checked { "x" } else { " " }, self.0)
    }
}

struct DarkButton(String);

impl Button for DarkButton {
    fn render(&self) -> String {
        format!("<< {} >>", self.0.to_uppercase())
    }
}

struct DarkCheckbox(String);

impl Checkbox for DarkCheckbox {
    fn render(&self, checked: bool) -> String {
        format!("{{{}}} {}", if checked { "#" } else { "." }, self.0.to_uppercase())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LightThemeFactory;

impl WidgetFactory for LightThemeFactory {
    fn theme(&self) -> &'static str {
        "light"
    }

    fn create_button(&self, label: &str) -> Box<dyn Button> {
        Box::new(LightButton(label.to_string()))
    }

    fn create_checkbox(&self, label: &str) -> Box<dyn Checkbox> {
        Box::new(LightCheckbox(label.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DarkThemeFactory;

impl WidgetFactory for DarkThemeFactory {
    fn theme(&self) -> &'static str {
        "dark"
    }

    fn create_button(&self, label: &str) -> Box<dyn Button> {
        Box::new(DarkButton(label.to_string()))
    }

    fn create_checkbox(&self, label: &str) -> Box<dyn Checkbox> {
        Box::new(DarkCheckbox(label.to_string()))
    }
}

/// Picks the factory for a theme name (case-insensitive).
pub fn widget_factory(theme: &str) -> Result<Box<dyn WidgetFactory>, FactoryError> {
    match theme.trim().to_ascii_lowercase().as_str() {
        "light" => Ok(Box::new(LightThemeFactory)),
        "dark" => Ok(Box::new(DarkThemeFactory)),
        _ => {
            warn!(theme, "Unknown theme");
            Err(FactoryError::UnknownProduct(theme.to_string()))
        }
    }
}

/// Renders a small form using only the abstract factory.
pub fn render_form(factory: &dyn WidgetFactory) -> Vec<String> {
    debug!(theme = factory.theme(), "Rendering form");
    vec![
        factory.create_checkbox("Remember me").render(true),
        factory.create_button("Sign in").render(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widgets_match_their_theme() {
        assert_eq!(
            render_form(&LightThemeFactory),
            vec!["[x] Remember me", "( Sign in )"]
        );
        assert_eq!(
            render_form(&DarkThemeFactory),
            vec!["{#} REMEMBER ME", "<< SIGN IN >>"]
        );
    }

    #[test]
    fn themes_are_selected_by_name() {
        assert_eq!(widget_factory("Dark").unwrap().theme(), "dark");
        assert_eq!(widget_factory("light").unwrap().theme(), "light");
        assert!(matches!(
            widget_factory("neon"),
            Err(FactoryError::UnknownProduct(theme)) if theme == "neon"
        ));
    }
}
