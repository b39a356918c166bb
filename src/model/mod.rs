pub use neurogene_core::{CellLogic, DnaLogic, NetLogic, SignalCodec};
pub mod body {
    pub use neurogene_core::body::*;
}
pub mod bounded {
    pub use neurogene_core::bounded::*;
}
pub mod brain {
    pub use neurogene_core::brain::*;
}
pub mod config {
    pub use neurogene_core::config::*;
}
pub mod error {
    pub use neurogene_core::error::*;
}
pub mod genetics {
    pub use neurogene_core::genetics::*;
}
pub mod organism {
    pub use neurogene_core::organism::*;
}
pub mod state {
    pub use neurogene_data::*;
}

pub use neurogene_core::init_logging;
