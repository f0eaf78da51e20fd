mod colors;
mod serialization;

pub use colors::DataType;

pub use serialization::{
    AbstractValue,
    Exportable,
    FromFileString,
    ToFileString,
    ToHumanString,
};
