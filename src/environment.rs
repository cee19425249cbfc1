use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{LoxError, Result};
use crate::value::Value;

/// One frame of the lexically nested environment chain.
///
/// Frames are shared (`Rc<RefCell<..>>`) because a closure can keep its
/// defining frame alive long after the call that created it has returned.
#[derive(Debug)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: None,
        }
    }

    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Self {
        Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }
    }

    /// Defining is idempotent: a later define overwrites.  This is what lets
    /// the REPL redeclare globals.
    pub fn define(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str, line: usize) -> Result<Value> {
        if let Some(value) = self.values.get(name) {
            Ok(value.clone())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow().get(name, line)
        } else {
            Err(undefined(name, line))
        }
    }

    pub fn assign(&mut self, name: &str, value: Value, line: usize) -> Result<()> {
        if self.values.contains_key(name) {
            self.values.insert(name.to_string(), value);
            Ok(())
        } else if let Some(enclosing) = &self.enclosing {
            enclosing.borrow_mut().assign(name, value, line)
        } else {
            Err(undefined(name, line))
        }
    }

    /// Read from the frame exactly `distance` hops up the chain, with no
    /// fallback to enclosing frames.  A miss here means the resolver and the
    /// runtime environment structure disagree.
    pub fn get_at(&self, distance: usize, name: &str, line: usize) -> Result<Value> {
        if distance == 0 {
            self.values
                .get(name)
                .cloned()
                .ok_or_else(|| undefined(name, line))
        } else {
            match &self.enclosing {
                Some(enclosing) => enclosing.borrow().get_at(distance - 1, name, line),
                None => Err(undefined(name, line)),
            }
        }
    }

    /// Write into the frame exactly `distance` hops up the chain.
    pub fn assign_at(&mut self, distance: usize, name: &str, value: Value, line: usize) -> Result<()> {
        if distance == 0 {
            self.values.insert(name.to_string(), value);
            Ok(())
        } else {
            match &self.enclosing {
                Some(enclosing) => enclosing
                    .borrow_mut()
                    .assign_at(distance - 1, name, value, line),
                None => Err(undefined(name, line)),
            }
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new()
    }
}

fn undefined(name: &str, line: usize) -> LoxError {
    LoxError::runtime_at(line, format!("Undefined variable '{}'.", name))
}
