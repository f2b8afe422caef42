use std::panic::{ catch_unwind, AssertUnwindSafe };
use thiserror::Error ;

use crate::{ BoxError, Module, ResourceFactoryProvider, TypeDescriptor };



/// Errors raised while constructing a resolved provider type.
#[derive( Debug, Error )]
pub enum InstantiationError {
	/// The module registered no parameterless constructor for the type.
	#[error( "No parameterless constructor is registered for \"{0}\"" )] NoConstructor( String ),
	/// The constructor returned an error.
	#[error( "Constructor of \"{type_name}\" failed: {source}" )]
	ConstructorFailed { type_name: String, #[source] source: BoxError },
	/// The constructor panicked.
	#[error( "Constructor of \"{type_name}\" panicked: {message}" )]
	ConstructorPanicked { type_name: String, message: String },
}

/// Runs the parameterless constructor registered for `descriptor`.
///
/// # Errors
/// Returns an error if no constructor is registered, or if the constructor fails or
/// panics. Panics are contained and never unwind into the caller.
pub fn instantiate( module: &Module, descriptor: &TypeDescriptor ) -> Result<Box<dyn ResourceFactoryProvider>, InstantiationError> {

	let type_name = descriptor.identity().full_name();
	let constructor = module.constructor( descriptor.identity() )
		.ok_or_else(|| InstantiationError::NoConstructor( type_name.clone() ))?;

	match catch_unwind( AssertUnwindSafe(|| constructor() )) {
		Ok( Ok( provider )) => Ok( provider ),
		Ok( Err( source )) => Err( InstantiationError::ConstructorFailed { type_name, source }),
		Err( payload ) => Err( InstantiationError::ConstructorPanicked { type_name, message: panic_message( &*payload ) }),
	}

}

pub(crate) fn panic_message( payload: &( dyn std::any::Any + Send )) -> String {
	payload.downcast_ref::<&str>().map(| message | ( *message ).to_string())
		.or_else(|| payload.downcast_ref::<String>().cloned())
		.unwrap_or_else(|| "unknown panic payload".to_string())
}
