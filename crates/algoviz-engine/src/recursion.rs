//! Tower of Hanoi.

use algoviz_core::action::{Peg, Towers};
use algoviz_core::{RecursionAction, Trace};

/// Largest disk count accepted by [`hanoi`].
pub const MAX_HANOI_DISKS: u32 = 6;

/// Classic three-peg recursive solution moving every disk from A to C.
///
/// Emits one `move_disk` per physical move, each carrying a copy of the
/// towers after that move.
pub fn hanoi(n_disks: u32) -> Trace {
    if n_disks > MAX_HANOI_DISKS {
        return Trace::error(format!(
            "Too many disks for animation. Please choose {MAX_HANOI_DISKS} or fewer."
        ));
    }

    let mut trace = Trace::new();
    let mut towers = Towers::stacked(n_disks);
    solve(n_disks, Peg::A, Peg::C, Peg::B, &mut towers, &mut trace);
    trace.complete("Tower of Hanoi puzzle solved!")
}

fn solve(
    n: u32,
    source: Peg,
    target: Peg,
    auxiliary: Peg,
    towers: &mut Towers,
    trace: &mut Trace,
) {
    if n == 0 {
        return;
    }
    solve(n - 1, source, auxiliary, target, towers, trace);

    // The source peg holds at least disk n here.
    if let Some(disk) = towers.peg_mut(source).pop() {
        towers.peg_mut(target).push(disk);
        trace.emit(
            RecursionAction::MoveDisk {
                disk_id: disk,
                from_peg: source,
                to_peg: target,
                towers_state: towers.clone(),
            },
            format!("Move disk {disk} from {source} to {target}."),
        );
    }

    solve(n - 1, auxiliary, target, source, towers, trace);
}

#[cfg(test)]
mod tests {
    use super::*;
    use algoviz_core::Action;

    fn moves(trace: &Trace) -> Vec<(u32, Peg, Peg, Towers)> {
        trace
            .with_name("move_disk")
            .filter_map(|s| match &s.action {
                Action::Recursion(RecursionAction::MoveDisk {
                    disk_id,
                    from_peg,
                    to_peg,
                    towers_state,
                }) => Some((*disk_id, *from_peg, *to_peg, towers_state.clone())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn three_disks_take_seven_moves() {
        let trace = hanoi(3);
        let moves = moves(&trace);
        assert_eq!(moves.len(), 7);
        assert_eq!((moves[0].0, moves[0].1, moves[0].2), (1, Peg::A, Peg::C));
        assert_eq!((moves[3].0, moves[3].1, moves[3].2), (3, Peg::A, Peg::C));
        assert!(trace.last().unwrap().is_complete());
    }

    #[test]
    fn folding_moves_reaches_target_peg() {
        let mut towers = Towers::stacked(4);
        for (disk, from, to, snapshot) in moves(&hanoi(4)) {
            assert_eq!(towers.peg_mut(from).pop(), Some(disk));
            towers.peg_mut(to).push(disk);
            assert_eq!(towers, snapshot);
        }
        assert_eq!(
            towers,
            Towers {
                c: vec![4, 3, 2, 1],
                ..Towers::default()
            }
        );
    }

    #[test]
    fn snapshots_are_independent_copies() {
        let trace = hanoi(2);
        let moves = moves(&trace);
        assert_eq!(moves[0].3.b, vec![1]);
        assert_eq!(moves[2].3.c, vec![2, 1]);
    }

    #[test]
    fn zero_disks_is_just_complete() {
        assert_eq!(hanoi(0).action_names(), vec!["complete"]);
    }

    #[test]
    fn disk_bound_enforced() {
        assert!(hanoi(7).is_error());
        assert_eq!(hanoi(6).count("move_disk"), 63);
    }
}
