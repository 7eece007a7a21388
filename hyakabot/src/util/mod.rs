pub use self::interaction::InteractionExt;

mod interaction;
