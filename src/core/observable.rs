//! # Observable Option Group
//!
//! Wraps an [`OptionGroupModel`] and publishes its selection on a
//! `tokio::sync::watch` channel, for views that would rather be told about
//! changes than re-read the model after each tap.
//!
//! Subscribers always see the latest selection. A tap that leaves the
//! selection as it was (re-selecting the already selected plain option) does
//! not wake them.

use log::debug;
use tokio::sync::watch;

use crate::core::action::{self, Tap};
use crate::core::model::OptionGroupModel;
use crate::core::selection::Selection;

pub struct ObservableOptionGroup {
    model: OptionGroupModel,
    sender: watch::Sender<Selection>,
}

impl ObservableOptionGroup {
    pub fn new(model: OptionGroupModel) -> Self {
        let (sender, _) = watch::channel(model.current_selection().clone());
        Self { model, sender }
    }

    /// A receiver whose initial value is the current selection.
    pub fn subscribe(&self) -> watch::Receiver<Selection> {
        self.sender.subscribe()
    }

    pub fn model(&self) -> &OptionGroupModel {
        &self.model
    }

    pub fn into_model(self) -> OptionGroupModel {
        self.model
    }

    pub fn current_selection(&self) -> &Selection {
        self.model.current_selection()
    }

    pub fn select_plain_option(&mut self, index: usize) {
        self.apply(Tap::Plain { index });
    }

    pub fn toggle_choice(&mut self, option: usize, choice: usize) {
        self.apply(Tap::Choice { option, choice });
    }

    /// Applies `tap` to the model and publishes the result if it changed.
    pub fn apply(&mut self, tap: Tap) {
        let selection = action::update(&mut self.model, tap);
        let changed = self.sender.send_if_modified(|published| {
            if *published == *selection {
                false
            } else {
                *published = selection.clone();
                true
            }
        });
        if changed {
            debug!(
                "Published selection {} to {} subscribers",
                selection,
                self.sender.receiver_count()
            );
        }
    }
}
