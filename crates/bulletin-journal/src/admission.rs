//! Admission control
//!
//! Only the admin can admit, a candidate can be admitted once, and the
//! roster never exceeds capacity. Both facts are re-derived from the log on
//! every call rather than kept in a live table, so an accepted admission is
//! self-validating against the full history visible at the time of the call.

use crate::action::Action;
use crate::board::Board;
use crate::log::Checkpoint;
use crate::notify::Notification;
use crate::reduce;
use bulletin_core::{BulletinError, ParticipantId, Result};
use tracing::{debug, warn};

impl Board {
    /// Admit a candidate to the roster
    ///
    /// Preconditions, checked in order with the first failure winning:
    /// the caller is the admin, the candidate holds no admission yet, and
    /// the roster has a free slot. A rejected call has no effect of any
    /// kind; an accepted call appends the admission and records the
    /// notification as one unit.
    pub fn admit(&mut self, candidate: ParticipantId, caller: ParticipantId) -> Result<()> {
        if caller != self.config.admin() {
            debug!(%caller, "admission rejected: caller is not the admin");
            return Err(BulletinError::NotAdmin { caller });
        }

        let bound = self.config.fold_bound();
        let from = Checkpoint::initial();

        if reduce::is_admitted(&self.log, &from, bound, &candidate)? {
            debug!(%candidate, "admission rejected: already admitted");
            return Err(BulletinError::AlreadyAdmitted { address: candidate });
        }

        // Count the roster as it would be after this admission.
        let count = reduce::admission_count(&self.log, &from, bound)? + 1;
        let max = self.config.max_users();
        if count > max {
            warn!(%candidate, count, max, "admission rejected: capacity exceeded");
            return Err(BulletinError::CapacityExceeded { count, max });
        }

        self.log.append(Action::admission(candidate))?;
        self.notifications
            .push(Notification::Admitted { address: candidate });
        debug!(%candidate, roster = count, "admission accepted");
        Ok(())
    }
}
