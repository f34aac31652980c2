use super::{Options, Request};

/// Optional parameters for creating a board.
#[derive(Debug, Clone, Default)]
pub struct BoardCreateOptions {
    pub description: Option<String>,
}

impl Options for BoardCreateOptions {
    fn add_to_request(&self, request: Request) -> Request {
        request.with_optional_form("description", self.description.as_deref())
    }
}

impl BoardCreateOptions {
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Fields to change on an existing board. Unset fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct BoardUpdateOptions {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Options for BoardUpdateOptions {
    fn add_to_request(&self, request: Request) -> Request {
        request
            .with_optional_form("name", self.name.as_deref())
            .with_optional_form("description", self.description.as_deref())
    }
}

impl BoardUpdateOptions {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_only_sends_set_fields() {
        let request = BoardUpdateOptions::default()
            .with_description("new description")
            .add_to_request(Request::patch("/boards/jdoe/recipes/"));
        assert_eq!(
            request.form_pairs(),
            &[("description".to_string(), "new description".to_string())]
        );
    }

    #[test]
    fn empty_create_options_send_nothing() {
        let request = BoardCreateOptions::default().add_to_request(Request::post("/boards/"));
        assert!(request.form_pairs().is_empty());
    }
}
