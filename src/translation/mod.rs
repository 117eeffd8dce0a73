/*!
 * Translation of document metadata between locales.
 *
 * Only titles are translated, and only through a static lookup table.
 */

pub mod titles;

pub use titles::{TitleTranslator, CZECH_TITLES};
