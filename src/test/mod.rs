pub(crate) mod utils;

use ctor::ctor;

#[ctor]
fn logs() {
    env_logger::init();
}
