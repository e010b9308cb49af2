//! Value sources and container lookup
//!
//! A field reads its current value through a `ValueSource` on every pass.
//! The engine never caches values: the backing widget or model may change
//! between passes. `SourceLocator` resolves sources by id at form
//! construction time.
//!
//! `Binding` is the in-process source used by glue code and tests: a shared
//! cell the owner writes to and the form reads from.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// The object backing a field no longer exists
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("source unavailable: {reason}")]
pub struct SourceUnavailable {
    pub reason: String,
}

impl SourceUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Zero-argument accessor for a field's current value
pub trait ValueSource<T> {
    fn read(&self) -> Result<T, SourceUnavailable>;
}

impl<T, F> ValueSource<T> for F
where
    F: Fn() -> Result<T, SourceUnavailable>,
{
    fn read(&self) -> Result<T, SourceUnavailable> {
        self()
    }
}

/// Shared, detachable value cell
///
/// Clones share the same cell. After `detach` every read fails with
/// `SourceUnavailable`, mirroring a widget removed from its container.
#[derive(Debug)]
pub struct Binding<T> {
    cell: Rc<RefCell<Option<T>>>,
}

impl<T> Binding<T> {
    pub fn new(value: T) -> Self {
        Self {
            cell: Rc::new(RefCell::new(Some(value))),
        }
    }

    /// Replace the current value, re-attaching a detached binding
    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = Some(value);
    }

    pub fn detach(&self) {
        *self.cell.borrow_mut() = None;
    }

    pub fn is_attached(&self) -> bool {
        self.cell.borrow().is_some()
    }
}

impl<T: Clone> Binding<T> {
    pub fn get(&self) -> Option<T> {
        self.cell.borrow().clone()
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Clone> ValueSource<T> for Binding<T> {
    fn read(&self) -> Result<T, SourceUnavailable> {
        self.get()
            .ok_or_else(|| SourceUnavailable::new("binding detached"))
    }
}

/// Resolves the source backing a field by its id
pub trait SourceLocator<T> {
    fn locate(&self, id: &str) -> Option<Box<dyn ValueSource<T>>>;
}

/// In-memory container of bindings keyed by id
#[derive(Debug)]
pub struct BindingMap<T> {
    bindings: HashMap<String, Binding<T>>,
}

impl<T> BindingMap<T> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Register a binding, returning a handle to it
    pub fn insert(&mut self, id: impl Into<String>, value: T) -> Binding<T> {
        let binding = Binding::new(value);
        self.bindings.insert(id.into(), binding.clone());
        binding
    }

    pub fn get(&self, id: &str) -> Option<&Binding<T>> {
        self.bindings.get(id)
    }

    /// Remove a binding; it stays registered with any form that already
    /// resolved it but is detached.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.bindings.remove(id) {
            Some(binding) => {
                binding.detach();
                true
            }
            None => false,
        }
    }
}

impl<T> Default for BindingMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> SourceLocator<T> for BindingMap<T> {
    fn locate(&self, id: &str) -> Option<Box<dyn ValueSource<T>>> {
        self.bindings
            .get(id)
            .map(|binding| Box::new(binding.clone()) as Box<dyn ValueSource<T>>)
    }
}
