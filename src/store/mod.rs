// Signature storage — the line-oriented record format and file loading.
//
// The attribution core never touches the filesystem. Everything that reads
// texts or signature files from disk lives here.

pub mod files;
pub mod record;
