//! View and controller objects

use crate::{Value, ViewKind};

/// Presentation logic/state attached to a view
#[derive(Debug, Clone)]
pub struct Controller {
    name: String,
    state: Value,
}

impl Controller {
    /// Create a controller with empty state
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            state: Value::Null,
        }
    }

    /// Attach presentation state
    pub fn with_state(mut self, state: Value) -> Self {
        self.state = state;
        self
    }

    /// Controller name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Presentation state
    pub fn state(&self) -> &Value {
        &self.state
    }
}

/// A live view instance, associated with a DOM element by id
#[derive(Debug, Clone)]
pub struct View {
    element_id: String,
    kind: ViewKind,
    controller: Controller,
    content: Option<Value>,
    context: Option<Value>,
}

impl View {
    /// Create a view bound to an element id
    pub fn new(element_id: &str, kind: ViewKind, controller: Controller) -> Self {
        Self {
            element_id: element_id.to_string(),
            kind,
            controller,
            content: None,
            context: None,
        }
    }

    /// Attach the displayed model
    pub fn with_content(mut self, content: Value) -> Self {
        self.content = Some(content);
        self
    }

    /// Attach the evaluation scope
    pub fn with_context(mut self, context: Value) -> Self {
        self.context = Some(context);
        self
    }

    /// Id of the element this view renders into
    pub fn element_id(&self) -> &str {
        &self.element_id
    }

    /// View class
    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    /// The view's controller
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// The model being displayed, if any
    pub fn content(&self) -> Option<&Value> {
        self.content.as_ref()
    }

    /// The evaluation scope, if any
    pub fn context(&self) -> Option<&Value> {
        self.context.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_accessors() {
        let view = View::new("vane-3", ViewKind::List, Controller::new("inbox"))
            .with_content(Value::from("messages"));

        assert_eq!(view.element_id(), "vane-3");
        assert_eq!(view.kind(), ViewKind::List);
        assert_eq!(view.controller().name(), "inbox");
        assert_eq!(view.content(), Some(&Value::from("messages")));
        assert_eq!(view.context(), None);
    }

    #[test]
    fn test_controller_state() {
        let controller = Controller::new("settings").with_state(Value::Bool(true));

        assert_eq!(controller.name(), "settings");
        assert_eq!(controller.state(), &Value::Bool(true));
    }
}
