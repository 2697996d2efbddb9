pub use anyhow::{ensure, format_err, Context as _, Error, Result};
pub use bbox::{prelude::*, Circle, TLBR, TLHW};
pub use itertools::Itertools as _;
pub use label::Label;
pub use log::{debug, info, warn};
pub use noisy_float::prelude::*;
pub use serde::{
    de::Error as _, Deserialize, Deserializer, Serialize, Serializer,
};
pub use std::{
    ffi::OsStr,
    fmt,
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
    str::FromStr,
};
pub use unit_wrapper::unit_wrapper;
