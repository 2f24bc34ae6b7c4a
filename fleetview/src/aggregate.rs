//! Per-tick roll-ups over the topology view. Pure; nothing is carried between ticks.

use std::collections::HashSet;

use crate::types::{Counters, StatusTally, Topology};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rollup {
    pub counters: Counters,
    pub status: StatusTally,
}

pub fn aggregate(tree: &Topology) -> Rollup {
    let servers = &tree.servers;

    // a room hosted on several servers counts once
    let rooms: HashSet<&str> = servers.iter().flat_map(|s| s.room_names()).collect();
    let full = servers.iter().filter(|s| s.full).count();

    Rollup {
        counters: Counters {
            server_count: servers.len(),
            room_count: rooms.len(),
            // saturates rather than wrapping on absurd reports
            user_count: servers
                .iter()
                .fold(0i64, |acc, s| acc.saturating_add(s.users)),
        },
        status: StatusTally {
            ready: servers.len() - full,
            full,
        },
    }
}
