//! Avatar key derivation and avatar image plumbing.
//!
//! An avatar is keyed by the SEA public key derived from a user's public key
//! string (used as a seed). Generating the image and swapping it into a page
//! are left to collaborators: [`AvatarGenerator`] produces image data from an
//! [`AvatarRequest`], and [`AvatarHost`] replaces an existing element with the
//! new image.

use core::future::Future;

use thiserror::Error;
use tracing::debug;

use crate::core::error::{KeyError, KeyResult};
use crate::core::operations::derive::derive_sea_pair;

/// Element id given to generated avatar images.
pub const AVATAR_ELEMENT_ID: &str = "S5Avatar";

/// Element id of the placeholder an avatar image replaces.
pub const AVATAR_TARGET_ID: &str = "avatar";

/// Drawing style understood by avatar generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStyle {
    /// Concentric circles.
    Circles,
    /// Squares.
    Squares,
}

impl DrawStyle {
    /// Parses a style name. Only `"circles"` and `"squares"` are recognized;
    /// anything else leaves the choice to the generator.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "circles" => Some(Self::Circles),
            "squares" => Some(Self::Squares),
            _ => None,
        }
    }

    /// The style name passed to generators.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Circles => "circles",
            Self::Squares => "squares",
        }
    }
}

/// Presentation options for an avatar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvatarOptions {
    /// Image size in pixels; `None` lets the generator choose.
    pub size: Option<u32>,
    /// Render the image element with fully rounded corners.
    pub round: bool,
    /// Dark theme.
    pub dark: bool,
    /// Mirror the pattern.
    pub reflect: bool,
    /// Drawing style; `None` lets the generator choose.
    pub draw: Option<DrawStyle>,
}

/// What an [`AvatarGenerator`] is asked to draw.
///
/// Carries only the options generators recognize; rounding is applied to
/// the image element instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarRequest {
    /// SEA public key the avatar is drawn from.
    pub pub_key: String,
    /// Image size in pixels.
    pub size: Option<u32>,
    /// Dark theme.
    pub dark: bool,
    /// Mirror the pattern.
    pub reflect: bool,
    /// Drawing style.
    pub draw: Option<DrawStyle>,
}

/// An image element ready to be placed in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    /// Element id, always [`AVATAR_ELEMENT_ID`].
    pub id: &'static str,
    /// Image source (the generator's data string).
    pub src: String,
    /// Whether the element gets a 100% border radius.
    pub rounded: bool,
}

/// A generated avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// Image data string returned by the generator.
    pub data: String,
    /// Image element wrapping `data`.
    pub image: AvatarImage,
}

/// Produces avatar image data for a public key.
pub trait AvatarGenerator {
    /// Generator failure, passed through unchanged.
    type Error;

    /// Renders the avatar described by `request` into an image data string.
    fn generate(
        &self,
        request: &AvatarRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;
}

/// A document that can swap an existing element for an avatar image.
pub trait AvatarHost {
    /// Replaces the element with id `target_id` by `image`, inserting the
    /// image where the element was. Returns `false` if no such element exists.
    fn replace_element(&mut self, target_id: &str, image: &AvatarImage) -> bool;
}

/// Errors returned by [`generate_avatar`].
#[derive(Debug, Error)]
pub enum AvatarError<E> {
    /// The avatar key could not be derived.
    #[error("Avatar key derivation failed: {0}")]
    Key(#[source] KeyError),

    /// The generator failed.
    #[error("Avatar generation failed: {0}")]
    Generator(E),
}

/// Derives the avatar key for a public key string.
///
/// The public key is used as the seed; the result is the SEA `pub` of the
/// derived pair.
///
/// # Errors
///
/// Returns `KeyError::InsufficientEntropy` if the public key is shorter than
/// 192 bits of entropy bytes.
pub fn avatar_key(public_key: &str) -> KeyResult<String> {
    Ok(derive_sea_pair(public_key)?.public_key().to_string())
}

/// Generates the avatar for `public_key`.
///
/// # Errors
///
/// Returns `AvatarError::Key` if no avatar key can be derived and
/// `AvatarError::Generator` with the generator's error if rendering fails.
pub async fn generate_avatar<G>(
    generator: &G,
    public_key: &str,
    options: &AvatarOptions,
) -> Result<Avatar, AvatarError<G::Error>>
where
    G: AvatarGenerator,
{
    let request = AvatarRequest {
        pub_key: avatar_key(public_key).map_err(AvatarError::Key)?,
        size: options.size,
        dark: options.dark,
        reflect: options.reflect,
        draw: options.draw,
    };

    let data = generator
        .generate(&request)
        .await
        .map_err(AvatarError::Generator)?;
    debug!(pub_key = %request.pub_key, "generated avatar");

    Ok(Avatar {
        image: AvatarImage {
            id: AVATAR_ELEMENT_ID,
            src: data.clone(),
            rounded: options.round,
        },
        data,
    })
}

/// Places `avatar` in `host` over the [`AVATAR_TARGET_ID`] element.
///
/// Returns `false` and leaves the host untouched if there is no such element.
pub fn mount_avatar<H: AvatarHost>(host: &mut H, avatar: &Avatar) -> bool {
    host.replace_element(AVATAR_TARGET_ID, &avatar.image)
}
