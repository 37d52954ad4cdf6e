use log::debug;
use macroquad::math::Vec2;

use crate::{Penalty, RushEvent, SessionState};

/// What a single catch did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchOutcome {
    Scored,
    ScoreLost(u32),
    LivesLost(i32),
    InstantGameOver,
}

/// Catches every uncaught object close enough to `pointer`, oldest first,
/// and applies the matching reward or penalty. Caught objects stay in the
/// session (flagged) until the cull that follows.
pub fn resolve(
    pointer: Vec2,
    session: &mut SessionState,
    catch_margin: f32,
    events: &mut Vec<RushEvent>,
) {
    let rules = session.difficulty.config();

    for idx in 0..session.objects.len() {
        let obj = &mut session.objects[idx];
        if obj.caught || pointer.distance(obj.pos) >= obj.radius + catch_margin {
            continue;
        }

        obj.caught = true;
        let (kind, pos) = (obj.kind, obj.pos);
        let outcome = match rules.penalty_for(kind) {
            None => {
                session.score += 1;
                CatchOutcome::Scored
            }
            Some(penalty) => apply_penalty(session, penalty),
        };

        debug!("Caught {kind:?}: {outcome:?}");
        events.push(RushEvent::Caught { kind, pos, outcome });
    }
}

pub fn apply_penalty(session: &mut SessionState, penalty: Penalty) -> CatchOutcome {
    match penalty {
        Penalty::ScoreDelta(amount) => {
            let lost = amount.min(session.score);
            session.score -= lost;
            CatchOutcome::ScoreLost(lost)
        }
        Penalty::LifeLoss(amount) => {
            session.lives -= amount;
            CatchOutcome::LivesLost(amount)
        }
        Penalty::InstantGameOver => {
            session.lives = 0;
            CatchOutcome::InstantGameOver
        }
    }
}
