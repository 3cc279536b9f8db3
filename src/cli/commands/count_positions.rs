//! Count positions command - count reachable positions at each depth.

use structopt::StructOpt;
use tictactoe::game::position_counter::{run_count_positions, CountPositionsStrategy};

use super::Command;

#[derive(StructOpt)]
pub struct CountPositionsArgs {
    #[structopt(short, long, default_value = "9")]
    pub depth: u8,
    #[structopt(short, long, default_value = "all")]
    pub strategy: CountPositionsStrategy,
}

impl Command for CountPositionsArgs {
    fn execute(self) {
        run_count_positions(self.depth, self.strategy);
    }
}
