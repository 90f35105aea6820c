use std::collections::{HashMap, hash_map::Entry};

use tracing::{debug, trace};

use crate::{
    ast::{Expression, IfBody, Program, Statement},
    error::{Result, SemanticError, StructuralError},
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Environment,
        },
        value::core::Value,
    },
};

/// Maps every mark name to the index of its `mark` statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    marks: HashMap<String, usize>,
}

impl LabelTable {
    /// Scans the whole program once for `mark` statements.
    ///
    /// Every mark is checked, whether or not anything jumps to it.
    ///
    /// # Errors
    /// Returns [`StructuralError::DuplicateMark`] if a name is marked twice.
    ///
    /// # Example
    /// ```
    /// use stackto::{interpreter::evaluator::program::LabelTable, parse_content};
    ///
    /// let program = parse_content("output [ 1 ]; mark end;", false).unwrap();
    /// let labels = LabelTable::build(&program).unwrap();
    ///
    /// assert_eq!(labels.resolve("end"), Ok(1));
    /// assert!(labels.resolve("start").is_err());
    /// ```
    pub fn build(program: &Program) -> std::result::Result<Self, StructuralError> {
        let mut marks = HashMap::new();

        for (index, statement) in program.statements().iter().enumerate() {
            let Statement::Mark(name) = statement else {
                continue;
            };

            match marks.entry(name.clone()) {
                Entry::Occupied(first) => {
                    return Err(StructuralError::DuplicateMark { name:   name.clone(),
                                                                first:  *first.get(),
                                                                second: index, });
                },
                Entry::Vacant(slot) => {
                    slot.insert(index);
                },
            }
        }

        debug!(marks = marks.len(), "built label table");
        Ok(Self { marks })
    }

    /// Returns the statement index of a mark.
    ///
    /// # Errors
    /// Returns [`SemanticError::UnknownMark`] if the mark does not exist.
    pub fn resolve(&self, name: &str) -> EvalResult<usize> {
        self.marks
            .get(name)
            .copied()
            .ok_or_else(|| SemanticError::UnknownMark { name: name.to_string() })
    }

    /// Number of marks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the program has no marks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

/// Where the instruction pointer goes after a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next statement.
    Advance,
    /// Continue at the given statement index.
    Jump(usize),
}

impl Context<'_> {
    /// Loads the label table and runs a program to completion.
    ///
    /// A fresh environment is created for the run and dropped when it ends.
    /// The run ends normally once the instruction pointer passes the last
    /// statement; backward jumps may loop forever.
    ///
    /// # Errors
    /// Fails before executing anything on a duplicate mark. Otherwise the
    /// first error raised by a statement aborts the run.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use stackto::{interpreter::evaluator::core::Context, parse_content};
    ///
    /// let program = parse_content("set $x [ 2 ]; output [ $x $x * ];", false).unwrap();
    /// let mut input = Cursor::new("");
    /// let mut output = Vec::new();
    ///
    /// Context::new(&mut input, &mut output).run(&program).unwrap();
    /// assert_eq!(output, b"<number : 4.0>\n");
    /// ```
    pub fn run(&mut self, program: &Program) -> Result<()> {
        let labels = LabelTable::build(program)?;
        let mut env = Environment::new();
        let mut ip = 0;

        while let Some(statement) = program.get(ip) {
            trace!(ip, %statement, "step");
            ip = match self.step(statement, &mut env, &labels)? {
                Flow::Advance => ip + 1,
                Flow::Jump(target) => target,
            };
        }

        debug!(variables = env.len(), "run finished");
        Ok(())
    }

    /// Executes one statement against `env`.
    ///
    /// # Errors
    /// Fails with the first error raised while evaluating the statement's
    /// expressions, looking up its variable or mark, or writing output.
    pub fn step(&mut self,
                statement: &Statement,
                env: &mut Environment,
                labels: &LabelTable)
                -> Result<Flow> {
        match statement {
            Statement::Comment(_) | Statement::Mark(_) => Ok(Flow::Advance),
            Statement::Goto(mark) => Ok(jump(mark, labels)?),
            Statement::Set { name, expr } => self.assign(name, expr, env),
            Statement::OutputVar(name) => self.output_variable(name, env),
            Statement::OutputExpr(expr) => self.output_expression(expr, env),
            Statement::If { guard, body } => match self.eval_expression(guard, env)? {
                Value::Bool(true) => self.step_body(body, env, labels),
                Value::Bool(false) => Ok(Flow::Advance),
                other => Err(SemanticError::NonBoolGuard { kind:  other.kind().name(),
                                                           value: other.to_string(), }.into()),
            },
        }
    }

    fn step_body(&mut self,
                 body: &IfBody,
                 env: &mut Environment,
                 labels: &LabelTable)
                 -> Result<Flow> {
        match body {
            IfBody::Goto(mark) => Ok(jump(mark, labels)?),
            IfBody::Set { name, expr } => self.assign(name, expr, env),
            IfBody::OutputVar(name) => self.output_variable(name, env),
            IfBody::OutputExpr(expr) => self.output_expression(expr, env),
        }
    }

    fn assign(&mut self, name: &str, expr: &Expression, env: &mut Environment) -> Result<Flow> {
        let value = self.eval_expression(expr, env)?;
        env.set(name, value);
        Ok(Flow::Advance)
    }

    fn output_variable(&mut self, name: &str, env: &Environment) -> Result<Flow> {
        let value = env.get(name)?;
        self.emit(value)?;
        Ok(Flow::Advance)
    }

    fn output_expression(&mut self, expr: &Expression, env: &Environment) -> Result<Flow> {
        let value = self.eval_expression(expr, env)?;
        self.emit(&value)?;
        Ok(Flow::Advance)
    }
}

fn jump(mark: &str, labels: &LabelTable) -> EvalResult<Flow> {
    labels.resolve(mark).map(Flow::Jump)
}
