//! Child content of a focus ring wrapper.
//!
//! UI layers wrap some content and hand it the current mode. The content is
//! one of three shapes, chosen by the caller when building the wrapper:
//! a render callback, a single child that takes the mode as an extra prop,
//! or content that doesn't care and is passed through untouched.

use std::rc::Rc;

/// Extra props handed to a [`ChildContent::Composable`] child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRingProps {
    pub is_keyboard_focus_ring_enabled: bool,
}

/// Content rendered inside a focus ring wrapper, generic over the node type.
pub enum ChildContent<N> {
    /// Called with `enabled` to produce the node.
    Render(Rc<dyn Fn(bool) -> N>),
    /// A single child receiving the mode through [`FocusRingProps`].
    Composable(Rc<dyn Fn(FocusRingProps) -> N>),
    /// Rendered as-is.
    Passthrough(N),
}

impl<N> ChildContent<N> {
    pub fn render(f: impl Fn(bool) -> N + 'static) -> Self {
        ChildContent::Render(Rc::new(f))
    }

    pub fn composable(f: impl Fn(FocusRingProps) -> N + 'static) -> Self {
        ChildContent::Composable(Rc::new(f))
    }

    pub fn passthrough(node: N) -> Self {
        ChildContent::Passthrough(node)
    }
}

impl<N: Clone> ChildContent<N> {
    /// Produce the node for the current mode.
    pub fn resolve(&self, enabled: bool) -> N {
        match self {
            ChildContent::Render(render) => render(enabled),
            ChildContent::Composable(child) => child(FocusRingProps {
                is_keyboard_focus_ring_enabled: enabled,
            }),
            ChildContent::Passthrough(node) => node.clone(),
        }
    }
}

impl<N: Clone> Clone for ChildContent<N> {
    fn clone(&self) -> Self {
        match self {
            ChildContent::Render(f) => ChildContent::Render(f.clone()),
            ChildContent::Composable(f) => ChildContent::Composable(f.clone()),
            ChildContent::Passthrough(node) => ChildContent::Passthrough(node.clone()),
        }
    }
}

/// Callbacks compare by identity.
impl<N: PartialEq> PartialEq for ChildContent<N> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ChildContent::Render(a), ChildContent::Render(b)) => Rc::ptr_eq(a, b),
            (ChildContent::Composable(a), ChildContent::Composable(b)) => Rc::ptr_eq(a, b),
            (ChildContent::Passthrough(a), ChildContent::Passthrough(b)) => a == b,
            _ => false,
        }
    }
}

impl<N: Default> Default for ChildContent<N> {
    fn default() -> Self {
        ChildContent::Passthrough(N::default())
    }
}

impl<N: std::fmt::Debug> std::fmt::Debug for ChildContent<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChildContent::Render(_) => f.write_str("Render(..)"),
            ChildContent::Composable(_) => f.write_str("Composable(..)"),
            ChildContent::Passthrough(node) => f.debug_tuple("Passthrough").field(node).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_receives_enabled() {
        let content = ChildContent::render(|enabled| format!("enabled={enabled}"));
        assert_eq!(content.resolve(true), "enabled=true");
        assert_eq!(content.resolve(false), "enabled=false");
    }

    #[test]
    fn test_composable_receives_props() {
        let content = ChildContent::composable(|props: FocusRingProps| {
            format!("normal=prop ring={}", props.is_keyboard_focus_ring_enabled)
        });
        assert_eq!(content.resolve(true), "normal=prop ring=true");
    }

    #[test]
    fn test_passthrough_ignores_mode() {
        let content = ChildContent::passthrough("static".to_string());
        assert_eq!(content.resolve(true), "static");
        assert_eq!(content.resolve(false), "static");
        assert_eq!(ChildContent::<String>::default().resolve(true), "");
    }

    #[test]
    fn test_equality_by_identity() {
        let a = ChildContent::render(|_| 1u8);
        let b = a.clone();
        let c = ChildContent::render(|_| 1u8);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(ChildContent::passthrough(1u8), ChildContent::passthrough(1u8));
    }
}
