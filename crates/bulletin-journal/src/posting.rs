//! Message submission
//!
//! A message is accepted when its payload passes the validity rules, the
//! sender holds an admission, and the sender has not already sent. Validity
//! is checked first so an invalid payload never reaches the log. Admission
//! and send-status are folds over the log, matching only the entry kind they
//! concern.

use crate::action::Action;
use crate::board::Board;
use crate::log::Checkpoint;
use crate::notify::Notification;
use crate::reduce;
use bulletin_core::{BulletinError, ParticipantId, Payload, Result};
use tracing::debug;

impl Board {
    /// Submit the caller's one message
    ///
    /// On acceptance, as a single unit: the message entry is appended, the
    /// sent-message counter increments by one, and the notification is
    /// recorded. A rejected call changes nothing.
    pub fn send_message(&mut self, payload: Payload, caller: ParticipantId) -> Result<()> {
        payload.validate()?;

        let bound = self.config.fold_bound();
        let from = Checkpoint::initial();

        if !reduce::is_admitted(&self.log, &from, bound, &caller)? {
            debug!(%caller, "message rejected: sender not admitted");
            return Err(BulletinError::NotAdmitted { address: caller });
        }

        if reduce::has_sent(&self.log, &from, bound, &caller)? {
            debug!(%caller, "message rejected: duplicate");
            return Err(BulletinError::DuplicateMessage { address: caller });
        }

        self.log.append(Action::message(caller, payload))?;
        self.sent_counter += 1;
        self.notifications.push(Notification::MessagePosted {
            sender: caller,
            payload,
        });
        debug!(%caller, sent = self.sent_counter, "message accepted");
        Ok(())
    }
}
