/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::context::*;
use super::draw::*;

use std::ops::{Deref, DerefMut};

///
/// Borrows a graphics context after storing its state: the state is restored when this is dropped
///
/// Clipping, alpha and blend mode changes made through this guard can't leak into whatever the context is
/// used for afterwards.
///
pub struct SavedState<'a, TContext: GraphicsContext + ?Sized> {
    context: &'a mut TContext,
}

///
/// Borrows a graphics context inside an isolated transparency layer: the layer is composited back when this is dropped
///
pub struct TransparencyLayer<'a, TContext: GraphicsContext + ?Sized> {
    context: &'a mut TContext,
}

///
/// Scoped versions of the state operations of a graphics context
///
pub trait GraphicsContextScopes: GraphicsContext {
    ///
    /// Stores the current state, returning a guard that restores it when it goes out of scope
    ///
    fn saved_state(&mut self) -> SavedState<'_, Self> {
        self.draw(Draw::PushState);

        SavedState { context: self }
    }

    ///
    /// Starts a transparency layer, returning a guard that finishes it when it goes out of scope
    ///
    fn transparency_layer(&mut self) -> TransparencyLayer<'_, Self> {
        self.draw(Draw::BeginTransparencyLayer);

        TransparencyLayer { context: self }
    }
}

impl<T: GraphicsContext + ?Sized> GraphicsContextScopes for T {}

impl<'a, TContext: GraphicsContext + ?Sized> Drop for SavedState<'a, TContext> {
    fn drop(&mut self) {
        self.context.draw(Draw::PopState);
    }
}

impl<'a, TContext: GraphicsContext + ?Sized> Drop for TransparencyLayer<'a, TContext> {
    fn drop(&mut self) {
        self.context.draw(Draw::EndTransparencyLayer);
    }
}

impl<'a, TContext: GraphicsContext + ?Sized> Deref for SavedState<'a, TContext> {
    type Target = TContext;

    fn deref(&self) -> &TContext {
        self.context
    }
}

impl<'a, TContext: GraphicsContext + ?Sized> DerefMut for SavedState<'a, TContext> {
    fn deref_mut(&mut self) -> &mut TContext {
        self.context
    }
}

impl<'a, TContext: GraphicsContext + ?Sized> Deref for TransparencyLayer<'a, TContext> {
    type Target = TContext;

    fn deref(&self) -> &TContext {
        self.context
    }
}

impl<'a, TContext: GraphicsContext + ?Sized> DerefMut for TransparencyLayer<'a, TContext> {
    fn deref_mut(&mut self) -> &mut TContext {
        self.context
    }
}
