//! GraphQL mutation documents

/// The six integration mapping mutations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutation {
    CreateCollection,
    CreateItem,
    UpdateCollection,
    UpdateItem,
    DeleteCollection,
    DeleteItem,
}

impl Mutation {
    /// GraphQL field and operation name
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::CreateCollection => "createIntegrationCollectionMapping",
            Mutation::CreateItem => "createIntegrationMapping",
            Mutation::UpdateCollection => "updateIntegrationCollectionMapping",
            Mutation::UpdateItem => "updateIntegrationMapping",
            Mutation::DeleteCollection => "destroyIntegrationCollectionMapping",
            Mutation::DeleteItem => "destroyIntegrationMapping",
        }
    }

    /// GraphQL input type name
    #[must_use]
    pub fn input_type(&self) -> &'static str {
        match self {
            Mutation::CreateCollection => "CreateIntegrationCollectionMappingInput",
            Mutation::CreateItem => "CreateIntegrationMappingInput",
            Mutation::UpdateCollection => "UpdateIntegrationCollectionMappingInput",
            Mutation::UpdateItem => "UpdateIntegrationMappingInput",
            Mutation::DeleteCollection => "DestroyIntegrationCollectionMappingInput",
            Mutation::DeleteItem => "DestroyIntegrationMappingInput",
        }
    }

    /// Full mutation document
    #[must_use]
    pub fn document(&self) -> String {
        format!(
            "mutation {name}($input: {input}!) {{\n  {name}(input: $input) {{\n    id\n  }}\n}}\n",
            name = self.name(),
            input = self.input_type(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_declares_input_variable() {
        let doc = Mutation::DeleteItem.document();
        assert!(doc.starts_with(
            "mutation destroyIntegrationMapping($input: DestroyIntegrationMappingInput!)"
        ));
        assert!(doc.contains("destroyIntegrationMapping(input: $input)"));
    }
}
