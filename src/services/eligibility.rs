// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Hotel eligibility rule.

use crate::models::TicketContext;

/// Whether the holder of this ticket chain may view hotel inventory.
///
/// Requires a paid ticket of an in-person class that includes lodging.
/// A missing chain is simply ineligible.
pub fn is_eligible(context: Option<&TicketContext>) -> bool {
    let Some(context) = context else {
        return false;
    };

    context.ticket.status.is_paid() && context.ticket_type.is_hostable()
}
