use warden_engine::{Item, ItemKey};

pub const CELL_KEY: Item = Item {
    key: ItemKey("cell-key"),
    name: "Cell key",
};

pub const TORCH: Item = Item {
    key: ItemKey("torch"),
    name: "Torch",
};
