//! Functions and methods

use super::documented::Documented;
use super::parameter::Parameter;

/// Package-level function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    name: String,
    doc: String,
    source: Option<String>,
    inputs: Vec<Parameter>,
    outputs: Vec<Parameter>,
}

impl Function {
    pub fn new(
        name: impl Into<String>,
        doc: impl Into<String>,
        source: Option<String>,
        inputs: Vec<Parameter>,
        outputs: Vec<Parameter>,
    ) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            source,
            inputs,
            outputs,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Verbatim declaration text; `None` when the span could not be read
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn inputs(&self) -> &[Parameter] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[Parameter] {
        &self.outputs
    }
}

impl Documented for Function {
    fn doc(&self) -> &str {
        &self.doc
    }
}

/// Method: a function bound to a receiver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    function: Function,
    receiver: Parameter,
    pointer_receiver: bool,
}

impl Method {
    pub fn new(function: Function, receiver: Parameter) -> Self {
        let pointer_receiver = receiver.pointer();
        Self {
            function,
            receiver,
            pointer_receiver,
        }
    }

    pub fn name(&self) -> &str {
        self.function.name()
    }

    pub fn source(&self) -> Option<&str> {
        self.function.source()
    }

    pub fn inputs(&self) -> &[Parameter] {
        self.function.inputs()
    }

    pub fn outputs(&self) -> &[Parameter] {
        self.function.outputs()
    }

    pub fn receiver(&self) -> &Parameter {
        &self.receiver
    }

    /// Whether the receiver is declared as `*T`
    pub fn pointer_receiver(&self) -> bool {
        self.pointer_receiver
    }

    /// The method viewed as a plain function
    pub fn as_function(&self) -> &Function {
        &self.function
    }
}

impl Documented for Method {
    fn doc(&self) -> &str {
        self.function.doc()
    }
}
