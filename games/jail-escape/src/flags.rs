/// Set by the cell door's `on_open`; unlocks the jail exit.
pub const CELL_DOOR_OPEN: &str = "cell-door-open";
