use thiserror::Error ;

use crate::{ InstantiationError, ResolveError };



/// An expected failure to acquire a provider.
///
/// Diagnostics are returned as values by [`acquire_provider`]( crate::acquire_provider ).
/// Each one explains what went wrong and, where possible, what to change.
#[derive( Debug, Error )]
pub enum Diagnostic {
	/// No loader callback was passed to the pipeline.
	#[error( "No module loader callback was supplied; one is required to load the artifact named by the artifact id." )]
	MissingLoader,
	/// The descriptor has an empty artifact id.
	#[error( "No artifact id was provided as the \"artifact_id\" locator parameter. The artifact id should be of the artifact holding an implementation of \"{}\".", crate::CONTRACT_NAME )]
	MissingArtifactId,
	/// The loader reported that the artifact or module does not exist.
	#[error( "Failed to load resource factory provider artifact \"{artifact_id}\"." )]
	ModuleNotFound { artifact_id: String },
	/// The loader failed or panicked.
	#[error( "An error occurred when loading resource factory provider artifact \"{artifact_id}\": {message}" )]
	LoaderFailed { artifact_id: String, message: String },
	/// The loaded module holds no usable provider type.
	#[error( "{0}" )] Resolution( #[from] ResolveError ),
	/// The provider type was found but could not be constructed.
	#[error( "An error occurred when instantiating the resource factory provider: {0}" )]
	Instantiation( #[from] InstantiationError ),
}
