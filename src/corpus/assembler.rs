use crate::remote::RemoteDocument;

use super::types::{CorpusItem, StoredText};

/// Builds the ordered comparison targets: local entries first, then remote
/// documents, each in its source order. Duplicates are kept.
pub fn assemble(local: &[StoredText], remote: Option<&[RemoteDocument]>) -> Vec<CorpusItem> {
    let remote = remote.unwrap_or_default();
    let mut items = Vec::with_capacity(local.len() + remote.len());

    items.extend(
        local
            .iter()
            .map(|entry| CorpusItem::local(entry.name.as_str(), entry.text.as_str())),
    );
    items.extend(
        remote
            .iter()
            .map(|doc| CorpusItem::remote(doc.name.as_str(), doc.content.as_str())),
    );

    items
}
