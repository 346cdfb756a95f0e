use std::hash::Hash;

use crate::arena::{NO_PARENT, Outcome, Search, SearchArena};
use crate::config::SearchConfig;
use crate::traits::AstarPather;

impl<S: Copy + Eq + Hash> SearchArena<S> {
    /// Best-first (A*) search from `start` until `pather` reports a goal.
    ///
    /// States are expanded in order of `g + estimate`, ties in the order they
    /// were queued, so identical inputs always give identical paths. A state
    /// is expanded at most once. The path is optimal when the estimate never
    /// overestimates and is consistent.
    ///
    /// `cfg.max_expansions` bounds the work; see [`SearchConfig`].
    pub fn astar<P>(&mut self, pather: &P, start: S, cfg: &SearchConfig) -> Search<S>
    where
        P: AstarPather<State = S>,
    {
        self.reset();

        if pather.is_goal(start) {
            return Search {
                path: vec![start],
                cost: 0,
                expanded: 0,
                outcome: Outcome::Found,
            };
        }

        let h0 = pather.estimate(start);
        debug_assert!(h0 >= 0, "negative heuristic");
        let si = self.add_node(start, 0, h0, NO_PARENT);
        self.push_open(si);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut expanded = 0usize;
        // Expanded node closest to the goal, for partial results.
        let mut closest = si;

        let outcome = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search Outcome::Exhausted;
            };

            let ci = current.idx;
            let (state, g, h) = {
                let n = &self.nodes[ci];
                // Skip stale entries.
                if n.closed || n.g != current.g {
                    continue;
                }
                (n.state, n.g, n.h)
            };

            if pather.is_goal(state) {
                closest = ci;
                break 'search Outcome::Found;
            }

            if cfg.max_expansions != 0 && expanded >= cfg.max_expansions {
                break 'search Outcome::LimitReached;
            }

            self.nodes[ci].closed = true;
            expanded += 1;
            if h < self.nodes[closest].h {
                closest = ci;
            }

            nbuf.clear();
            pather.neighbors(state, &mut nbuf);

            for &(next, cost) in nbuf.iter() {
                debug_assert!(cost > 0, "non-positive transition cost {cost}");
                let tentative_g = g + cost;

                match self.lookup.get(&next).copied() {
                    Some(ni) => {
                        let n = &mut self.nodes[ni];
                        if n.closed || tentative_g >= n.g {
                            continue;
                        }
                        n.g = tentative_g;
                        n.parent = ci;
                        self.push_open(ni);
                    }
                    None => {
                        let nh = pather.estimate(next);
                        debug_assert!(nh >= 0, "negative heuristic");
                        let ni = self.add_node(next, tentative_g, nh, ci);
                        self.push_open(ni);
                    }
                }
            }
        };

        self.nbuf = nbuf;

        match outcome {
            Outcome::Found => Search {
                path: self.path_to(closest),
                cost: self.nodes[closest].g,
                expanded,
                outcome,
            },
            Outcome::LimitReached => {
                log::warn!("search stopped after {expanded} expansions");
                if cfg.partial_on_limit {
                    Search {
                        path: self.path_to(closest),
                        cost: self.nodes[closest].g,
                        expanded,
                        outcome,
                    }
                } else {
                    Search::empty(outcome, expanded)
                }
            }
            Outcome::Exhausted => Search::empty(outcome, expanded),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Pather;

    /// Integers on a line; steps of +1 cost 1, steps of +3 cost `jump`.
    struct LinePather {
        goal: i32,
        max: i32,
        jump: i32,
    }

    impl Pather for LinePather {
        type State = i32;

        fn neighbors(&self, s: i32, buf: &mut Vec<(i32, i32)>) {
            if s < self.max {
                buf.push((s + 1, 1));
            }
            if s + 3 <= self.max {
                buf.push((s + 3, self.jump));
            }
            if s > 0 {
                buf.push((s - 1, 1));
            }
        }
    }

    impl AstarPather for LinePather {
        fn estimate(&self, s: i32) -> i32 {
            // One unit per three cells never overestimates.
            (self.goal - s).abs() / 3
        }

        fn is_goal(&self, s: i32) -> bool {
            s == self.goal
        }
    }

    #[test]
    fn takes_cheap_jumps() {
        let p = LinePather {
            goal: 9,
            max: 20,
            jump: 2,
        };
        let mut arena = SearchArena::new();
        let res = arena.astar(&p, 0, &SearchConfig::default());
        assert!(res.is_found());
        assert_eq!(res.path, vec![0, 3, 6, 9]);
        assert_eq!(res.cost, 6);
    }

    #[test]
    fn avoids_expensive_jumps() {
        let p = LinePather {
            goal: 4,
            max: 20,
            jump: 10,
        };
        let mut arena = SearchArena::new();
        let res = arena.astar(&p, 0, &SearchConfig::default());
        assert_eq!(res.path, vec![0, 1, 2, 3, 4]);
        assert_eq!(res.cost, 4);
    }

    #[test]
    fn start_is_goal() {
        let p = LinePather {
            goal: 3,
            max: 5,
            jump: 1,
        };
        let mut arena = SearchArena::new();
        let res = arena.astar(&p, 3, &SearchConfig::default());
        assert_eq!(res.path, vec![3]);
        assert_eq!(res.cost, 0);
        assert_eq!(res.expanded, 0);
    }

    #[test]
    fn exhausts_finite_space() {
        let p = LinePather {
            goal: 50,
            max: 10,
            jump: 1,
        };
        let mut arena = SearchArena::new();
        let res = arena.astar(&p, 0, &SearchConfig::default());
        assert_eq!(res.outcome, Outcome::Exhausted);
        assert!(res.path.is_empty());
        // Every state 0..=10 expanded exactly once.
        assert_eq!(res.expanded, 11);
        assert_eq!(arena.discovered(), 11);
    }

    #[test]
    fn expansion_cap_is_a_hard_stop() {
        let p = LinePather {
            goal: 100,
            max: 200,
            jump: 5,
        };
        let mut arena = SearchArena::new();
        let cfg = SearchConfig {
            max_expansions: 4,
            ..Default::default()
        };
        let res = arena.astar(&p, 0, &cfg);
        assert_eq!(res.outcome, Outcome::LimitReached);
        assert_eq!(res.expanded, 4);
        assert!(res.path.is_empty());

        let cfg = SearchConfig {
            partial_on_limit: true,
            ..cfg
        };
        let res = arena.astar(&p, 0, &cfg);
        assert_eq!(res.outcome, Outcome::LimitReached);
        assert_eq!(res.path.first(), Some(&0));
        let last = *res.path.last().unwrap();
        assert!(last > 0, "partial path should make progress, got {:?}", res.path);
    }

    #[test]
    fn arena_is_reusable() {
        let mut arena = SearchArena::new();
        let a = LinePather {
            goal: 7,
            max: 10,
            jump: 2,
        };
        let b = LinePather {
            goal: 2,
            max: 10,
            jump: 2,
        };
        let first = arena.astar(&a, 0, &SearchConfig::default());
        let second = arena.astar(&b, 0, &SearchConfig::default());
        let again = arena.astar(&a, 0, &SearchConfig::default());
        assert_eq!(first, again);
        assert_eq!(second.path, vec![0, 1, 2]);
    }
}
