pub mod backup_config;
pub mod console;
pub mod copy;
pub mod driver;
pub mod manifest;
pub mod notice;
pub mod result_error;
pub mod slot;
pub mod validate;

macro_rules! function_path {
    () => {
        concat!(module_path!(), "::", function_name!(), " ", file!(), ":", line!())
    };
}

pub(crate) use function_path;
