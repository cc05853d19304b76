pub mod os;

use os::Os;

/// Returns the operating system the tool is running on
pub fn os() -> Os {
  Os::current()
}
