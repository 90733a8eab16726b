//! Command registry
//!
//! Maps `(Context, Keystroke)` to a described handler. Lookup tries the
//! requested context first and then [`Context::Global`]. A keystroke can be
//! bound at most once per context; a second registration is rejected when
//! the bindings are built, never at dispatch time.

use super::keybindings::{Context, Hint, Keystroke};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Whether a handler consumed the event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Swallowed; nothing else sees the key
    Consumed,
    /// Not handled; the key goes to the surface's default behavior
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("{keystroke} is already bound in {context} to \"{existing}\"")]
    DuplicateBinding {
        context: Context,
        keystroke: Keystroke,
        existing: String,
    },
}

/// Handler signature; receives the context the key was dispatched in
pub type Handler<S> = Box<dyn Fn(&mut S, Context) -> EventResult>;

/// One binding
pub struct Command<S> {
    pub keystroke: Keystroke,
    pub context: Context,
    pub description: String,
    handler: Handler<S>,
}

impl<S> Command<S> {
    pub fn call(&self, state: &mut S, context: Context) -> EventResult {
        (self.handler)(state, context)
    }
}

impl<S> fmt::Debug for Command<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("keystroke", &self.keystroke)
            .field("context", &self.context)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Row of the help listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub context: Context,
    pub keystroke: Keystroke,
    pub description: String,
}

impl fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<10} - {}", self.keystroke.to_string(), self.description)
    }
}

pub struct CommandRegistry<S> {
    bindings: HashMap<Context, HashMap<Keystroke, Command<S>>>,
    /// Registration order, for stable help and footer listings
    order: Vec<(Context, Keystroke)>,
    last_context: Option<Context>,
}

impl<S> Default for CommandRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> CommandRegistry<S> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            order: Vec::new(),
            last_context: None,
        }
    }

    /// Bind `keystroke` in `context`
    pub fn register<F>(
        &mut self,
        keystroke: impl Into<Keystroke>,
        context: Context,
        description: impl Into<String>,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&mut S, Context) -> EventResult + 'static,
    {
        let keystroke = keystroke.into();
        let scope = self.bindings.entry(context).or_default();

        if let Some(existing) = scope.get(&keystroke) {
            return Err(RegistryError::DuplicateBinding {
                context,
                keystroke,
                existing: existing.description.clone(),
            });
        }

        scope.insert(
            keystroke,
            Command {
                keystroke,
                context,
                description: description.into(),
                handler: Box::new(handler),
            },
        );
        self.order.push((context, keystroke));
        Ok(())
    }

    /// Look up `keystroke` in `context`, falling back to Global
    pub fn resolve(&self, context: Context, keystroke: Keystroke) -> Option<&Command<S>> {
        self.resolve_exact(context, keystroke).or_else(|| {
            if context == Context::Global {
                None
            } else {
                self.resolve_exact(Context::Global, keystroke)
            }
        })
    }

    /// Look up `keystroke` in `context` only
    pub fn resolve_exact(&self, context: Context, keystroke: Keystroke) -> Option<&Command<S>> {
        self.bindings
            .get(&context)
            .and_then(|scope| scope.get(&keystroke))
    }

    /// Resolve with Global fallback and run the handler
    ///
    /// Returns `None` when nothing is bound.
    pub fn invoke(
        &mut self,
        context: Context,
        keystroke: Keystroke,
        state: &mut S,
    ) -> Option<EventResult> {
        let owner = self.resolve(context, keystroke)?.context;
        Some(self.run(owner, context, keystroke, state))
    }

    /// Like [`invoke`](Self::invoke) without the Global fallback
    pub fn invoke_exact(
        &mut self,
        context: Context,
        keystroke: Keystroke,
        state: &mut S,
    ) -> Option<EventResult> {
        self.resolve_exact(context, keystroke)?;
        Some(self.run(context, context, keystroke, state))
    }

    fn run(
        &mut self,
        owner: Context,
        context: Context,
        keystroke: Keystroke,
        state: &mut S,
    ) -> EventResult {
        if owner != Context::Global {
            self.last_context = Some(owner);
        }

        match self
            .bindings
            .get(&owner)
            .and_then(|scope| scope.get(&keystroke))
        {
            Some(command) => {
                tracing::debug!(
                    "{} in {} -> {} ({})",
                    keystroke,
                    context,
                    command.description,
                    owner
                );
                command.call(state, context)
            }
            None => EventResult::Ignored,
        }
    }

    /// Most recent non-Global context a handler ran in
    pub fn last_context(&self) -> Option<Context> {
        self.last_context
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Every binding in registration order
    pub fn entries(&self) -> Vec<HelpEntry> {
        self.order
            .iter()
            .filter_map(|(context, keystroke)| self.resolve_exact(*context, *keystroke))
            .map(|command| HelpEntry {
                context: command.context,
                keystroke: command.keystroke,
                description: command.description.clone(),
            })
            .collect()
    }

    /// Footer hints for `context`
    ///
    /// Keys sharing a description are merged (`j/Down`). Bindings of the
    /// context come first, then Global ones, unless `context` suppresses
    /// the Global fallback.
    pub fn hints(&self, context: Context, include_global: bool) -> Vec<Hint> {
        let mut hints: Vec<(Context, Hint)> = Vec::new();

        for (ctx, keystroke) in self.order.iter().filter(|(ctx, _)| *ctx == context) {
            self.push_hint(&mut hints, *ctx, *keystroke);
        }
        if include_global && context != Context::Global {
            for (ctx, keystroke) in self.order.iter().filter(|(ctx, _)| *ctx == Context::Global) {
                // Shadowed by a context binding
                if self.resolve_exact(context, *keystroke).is_some() {
                    continue;
                }
                self.push_hint(&mut hints, *ctx, *keystroke);
            }
        }

        hints.into_iter().map(|(_, hint)| hint).collect()
    }

    fn push_hint(&self, hints: &mut Vec<(Context, Hint)>, context: Context, keystroke: Keystroke) {
        let Some(command) = self.resolve_exact(context, keystroke) else {
            return;
        };
        if let Some((_, hint)) = hints
            .iter_mut()
            .find(|(ctx, hint)| *ctx == context && hint.label == command.description)
        {
            hint.key = format!("{}/{}", hint.key, keystroke);
        } else {
            hints.push((context, Hint::new(keystroke.to_string(), &command.description)));
        }
    }
}
