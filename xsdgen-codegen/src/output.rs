//! The generated class artifact.
//!
//! A `GeneratedClass` is a structured description of one emitted class:
//! ordered constants, fields and methods, with method bodies held as
//! ordered statement sequences. Rendering statements into source text is
//! the job of a downstream writer; this engine never manipulates formatted
//! text.

use serde::Serialize;
use xsdgen_core::CheckKind;
use xsdgen_model::Visibility;

/// An expression node inside a generated statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    /// Reference to a method parameter.
    Param(String),
    /// Reference to a field of the instance under construction.
    Field(String),
    /// Opaque literal value.
    Literal(String),
    /// String form of the inner expression.
    StringOf(Box<Expr>),
    /// Construction of a new instance of the enclosing class.
    NewInstance(Vec<Expr>),
    /// The named class's static factory applied to the inner expression.
    FactoryWrap {
        /// Factory-owning class name.
        class: String,
        /// Value passed to the factory.
        value: Box<Expr>,
    },
    /// The named class's static factory applied to every element of the
    /// inner collection expression.
    WrapEach {
        /// Factory-owning class name.
        class: String,
        /// Collection whose elements are wrapped.
        value: Box<Expr>,
    },
    /// The enclosing class's restriction-checking routine applied to the
    /// inner expression.
    CheckRestrictions(Box<Expr>),
    /// The ordered list of the named enumeration constants.
    ConstantList(Vec<String>),
    /// Existence test of a collection field at the given index.
    IndexExists {
        /// Collection field name.
        field: String,
        /// Index expression.
        index: Box<Expr>,
    },
}

/// A statement node of a generated method body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// Assigns the expression to a field.
    Assign {
        /// Target field name.
        field: String,
        /// Assigned value.
        value: Expr,
    },
    /// Appends the expression to a collection field.
    AppendTo {
        /// Collection field name.
        field: String,
        /// Appended value.
        value: Expr,
    },
    /// Removes the element at the given index from a collection field.
    RemoveAt {
        /// Collection field name.
        field: String,
        /// Index expression.
        index: Expr,
    },
    /// Returns the expression.
    Return(Expr),
    /// Returns the instance itself (fluent accessors).
    ReturnSelf,
    /// Runs the nested statements when the named parameter is non-null.
    IfNotNull {
        /// Guarded parameter name.
        param: String,
        /// Statements to run when the parameter is present.
        then: Vec<Statement>,
    },
    /// Invokes another method of the same instance.
    CallOwnMethod {
        /// Method name.
        name: String,
        /// Argument expressions.
        args: Vec<Expr>,
    },
    /// Applies one restriction check to the routine's value, storing the
    /// (possibly transformed) result back into it.
    ApplyCheck {
        /// Restriction kind.
        kind: CheckKind,
        /// Declared facet values.
        args: Vec<String>,
    },
    /// Asserts that a field's occurrence count lies within the declared
    /// range.
    RequireCount {
        /// Field name.
        field: String,
        /// Minimum occurrences.
        min: u32,
        /// Maximum occurrences (None = unbounded).
        max: Option<u32>,
    },
    /// Invokes the referenced value's own validation routine.
    ValidateField {
        /// Field name.
        field: String,
    },
    /// Invokes the nested validation routine on every element of a
    /// collection field.
    ValidateElements {
        /// Collection field name.
        field: String,
    },
}

/// A parameter of a generated method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Declared type accepted by the emitted parameter, if any.
    pub type_hint: Option<String>,
    /// Documented type.
    pub doc_type: Option<String>,
    /// Whether the parameter defaults to null.
    pub default_null: bool,
}

impl Parameter {
    /// Creates an untyped parameter.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_hint: None,
            doc_type: None,
            default_null: false,
        }
    }

    /// Sets the declared type hint.
    #[must_use]
    pub fn with_type_hint(mut self, type_hint: impl Into<String>) -> Self {
        self.type_hint = Some(type_hint.into());
        self
    }

    /// Sets the documented type.
    #[must_use]
    pub fn with_doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Marks the parameter as defaulting to null.
    #[must_use]
    pub fn with_default_null(mut self) -> Self {
        self.default_null = true;
        self
    }
}

/// A generated backing field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedField {
    /// Field name.
    pub name: String,
    /// Visibility.
    pub visibility: Visibility,
    /// Documentation text.
    pub doc: Option<String>,
    /// Documented type.
    pub doc_type: Option<String>,
}

/// A generated class constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedConst {
    /// Constant name.
    pub name: String,
    /// Constant value.
    pub value: String,
    /// Documented type.
    pub doc_type: Option<String>,
}

/// A generated method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedMethod {
    /// Method name.
    pub name: String,
    /// Visibility.
    pub visibility: Visibility,
    /// Whether the method is static.
    pub is_static: bool,
    /// Ordered parameters.
    pub parameters: Vec<Parameter>,
    /// Ordered statement body.
    pub body: Vec<Statement>,
    /// Documentation text.
    pub doc: Option<String>,
    /// Documented return type.
    pub doc_return: Option<String>,
}

impl GeneratedMethod {
    /// Creates a public, non-static method with an empty body.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            is_static: false,
            parameters: Vec::new(),
            body: Vec::new(),
            doc: None,
            doc_return: None,
        }
    }
}

/// Base-class relationship of a generated class.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub enum BaseClass {
    /// No base class.
    #[default]
    None,
    /// Language-level extension of a structural class.
    Extends {
        /// Base class simple name.
        name: String,
        /// Base class namespace, if any.
        namespace: Option<String>,
        /// Import alias when the base shares the derived class's simple
        /// name across namespaces.
        alias: Option<String>,
    },
    /// The base was a value wrapper; its members were inlined instead of
    /// using language-level inheritance.
    InlinedWrapper,
}

/// An import declaration of a generated class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UseDecl {
    /// Imported class simple name.
    pub name: String,
    /// Imported class namespace, if any.
    pub namespace: Option<String>,
    /// Import alias, if any.
    pub alias: Option<String>,
}

/// One complete generated class definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedClass {
    /// Class name.
    pub name: String,
    /// Namespace, if any.
    pub namespace: Option<String>,
    /// Documentation text.
    pub doc: Option<String>,
    /// Base-class relationship.
    pub base: BaseClass,
    /// Import declarations.
    pub uses: Vec<UseDecl>,
    /// Ordered constants.
    pub constants: Vec<GeneratedConst>,
    /// Ordered fields.
    pub fields: Vec<GeneratedField>,
    /// Ordered methods.
    pub methods: Vec<GeneratedMethod>,
}

impl GeneratedClass {
    /// Creates an empty class shell.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            doc: None,
            base: BaseClass::default(),
            uses: Vec::new(),
            constants: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Appends a field.
    pub fn add_field(&mut self, field: GeneratedField) {
        self.fields.push(field);
    }

    /// Returns true if a field with the given name exists.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Appends a method.
    pub fn add_method(&mut self, method: GeneratedMethod) {
        self.methods.push(method);
    }

    /// Returns true if a method with the given name exists.
    #[must_use]
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name)
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&GeneratedMethod> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Looks up a method by name, mutably.
    pub fn method_mut(&mut self, name: &str) -> Option<&mut GeneratedMethod> {
        self.methods.iter_mut().find(|m| m.name == name)
    }

    /// Appends a constant.
    pub fn add_constant(&mut self, constant: GeneratedConst) {
        self.constants.push(constant);
    }

    /// Returns true if a constant with the given name exists.
    #[must_use]
    pub fn has_constant(&self, name: &str) -> bool {
        self.constants.iter().any(|c| c.name == name)
    }

    /// Looks up a constant by name.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&GeneratedConst> {
        self.constants.iter().find(|c| c.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_lookup() {
        let mut class = GeneratedClass::new("Single");
        class.add_method(GeneratedMethod::new("getId"));
        class.add_method(GeneratedMethod::new("setId"));

        assert!(class.has_method("getId"));
        assert!(!class.has_method("addToId"));
        assert_eq!(class.method("setId").map(|m| m.name.as_str()), Some("setId"));
        assert!(class.method_mut("getId").is_some());
    }

    #[test]
    fn test_constant_lookup() {
        let mut class = GeneratedClass::new("Single");
        class.add_constant(GeneratedConst {
            name: "V_A".to_string(),
            value: "A".to_string(),
            doc_type: None,
        });

        assert!(class.has_constant("V_A"));
        assert!(!class.has_constant("V_B"));
        assert_eq!(class.constant("V_A").map(|c| c.value.as_str()), Some("A"));
    }

    #[test]
    fn test_artifact_serializes() {
        let mut class = GeneratedClass::new("Single");
        class.add_field(GeneratedField {
            name: "id".to_string(),
            visibility: Visibility::Private,
            doc: None,
            doc_type: Some("int".to_string()),
        });
        let mut method = GeneratedMethod::new("getId");
        method.body.push(Statement::Return(Expr::Field("id".to_string())));
        class.add_method(method);

        let json = serde_json::to_string(&class).expect("artifact should serialize");
        assert!(json.contains("getId"));
        assert!(json.contains("Return"));
    }
}
