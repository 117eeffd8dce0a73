/*!
 * Frontmatter handling for Markdown/MDX documents.
 *
 * - `model`: decoded frontmatter data
 * - `codec`: split, decode and encode of the delimited header
 */

pub mod codec;
pub mod model;

pub use codec::{decode, encode, has_frontmatter, split, FrontmatterBlock, DELIMITER};
pub use model::{FrontmatterData, FrontmatterMap, FrontmatterValue};
