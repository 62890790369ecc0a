use crate::{Event, EventBus, Table};
use serde::{Deserialize, Serialize};

/// Which rule set a game runs under. One engine, two scan disciplines.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Variant {
    Accordion,
    OnceInALifetime,
}

/// Settles the classic-accordion chain triggered by the pile at `dealt`.
///
/// The scan keeps a focus index and a target floor. At the focus, a
/// distance-3 merge is tried before distance-1. Every merge restarts the
/// scan from the top of the remaining stack with the floor lowered to the
/// merge destination, because compaction can expose matches far to the
/// left; without a merge the focus steps left until it reaches the floor.
pub fn settle(table: &mut Table, dealt: usize, events: &mut EventBus) {
    let mut focus = dealt;
    let mut target = dealt;
    loop {
        match try_merge(table, focus) {
            Some(dst) => {
                if events.is_capturing() {
                    events.push(Event::MergeStep {
                        checked: focus,
                        merged_into: dst,
                        snapshot: table.snapshot(),
                    });
                }
                target = dst;
                focus = table.active() - 1;
            }
            None if focus > target => focus -= 1,
            None => break,
        }
    }
}

/// Tries the two merge rules at `index`; on success compacts the vacated
/// slot and returns the destination index.
fn try_merge(table: &mut Table, index: usize) -> Option<usize> {
    if index >= 3 && table.matches(index, index - 3) {
        table.merge(index - 3, index);
        table.compact_gap(index, 1);
        return Some(index - 3);
    }
    if index >= 1 && table.matches(index, index - 1) {
        table.merge(index - 1, index);
        table.compact_gap(index, 1);
        return Some(index - 1);
    }
    None
}

/// Once-in-a-lifetime elimination pass over a fully dealt table.
///
/// Only the fixed window (`i`, `i + 3`) is ever compared. A rank match
/// discards the whole four-pile span and backs the scan up by four; a suit
/// match discards just the two interior piles and backs up by two; both
/// back-steps clamp at zero. No match advances the window by one. The pass
/// ends when the window no longer fits inside the occupied prefix.
pub fn eliminate(table: &mut Table, events: &mut EventBus) {
    let mut index = 0;
    while index + 3 < table.active() {
        if table.rank_match(index, index + 3) {
            table.discard_span(index, 4);
            if events.is_capturing() {
                events.push(Event::SpanRemoved {
                    start: index,
                    width: 4,
                    snapshot: table.snapshot(),
                });
            }
            index = index.saturating_sub(4);
        } else if table.suit_match(index, index + 3) {
            table.discard_span(index + 1, 2);
            if events.is_capturing() {
                events.push(Event::SpanRemoved {
                    start: index + 1,
                    width: 2,
                    snapshot: table.snapshot(),
                });
            }
            index = index.saturating_sub(2);
        } else {
            index += 1;
        }
    }
}
