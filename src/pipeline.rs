//! Loading, resolving, instantiating and binding a provider.
//!
//! [`acquire_provider`] runs the first three stages and reports expected failures as a
//! [`Diagnostic`]. [`create_typed_factory`] and [`create_factory_using_configuration`]
//! also bind creation parameters; since they promise a usable factory, any diagnostic
//! becomes a [`FactoryError`] there.
//!
//! Every call is an independent run. Nothing is cached between calls, so acquiring
//! twice from the same descriptor loads ( as far as the loader is concerned ) and
//! instantiates twice.

use std::panic::AssertUnwindSafe ;
use std::sync::Arc ;
use futures_util::FutureExt ;
use pipe_trait::Pipe ;
use thiserror::Error ;
use tokio_util::sync::CancellationToken ;

use crate::{
	BindError, ConfigurationFileSource, Diagnostic, FileBasedLocatorDescriptor, LocatorDescriptor,
	ModuleLoader, ModuleRequest, ParameterSource, ResourceFactory, ResourceFactoryProvider,
};
use crate::instantiate::{ instantiate, panic_message };
use crate::provider::provider_contract ;
use crate::resolver::resolve_type ;



/// Outcome of [`acquire_provider`]: either a provider owned by the caller or a
/// diagnostic explaining why there is none.
pub type Resolution = Result<Box<dyn ResourceFactoryProvider>, Diagnostic>;

/// Errors returned by the factory-creating entry points.
#[derive( Debug, Error )]
pub enum FactoryError {
	/// The provider could not be acquired. Carries the diagnostic text.
	#[error( "{0}" )] Unavailable( String ),
	/// Creation parameters could not be produced or bound.
	#[error( "{0}" )] Binding( #[from] BindError ),
	/// The provider's factory creates a different resource type than requested.
	#[error( "The provider binds a factory for \"{actual}\" resources, but \"{expected}\" resources were requested" )]
	ResourceTypeMismatch { expected: &'static str, actual: &'static str },
}

impl FactoryError {

	/// Returns `true` for errors caused by the caller's own misconfiguration rather
	/// than by the loaded provider or its environment.
	pub fn is_defect( &self ) -> bool {
		matches!( self, Self::Binding( BindError::MissingConfigurationSource ))
	}

	fn unavailable( diagnostic: &Diagnostic ) -> Self {
		let message = diagnostic.to_string();
		// No diagnostic renders empty today; the error text must never be blank either way.
		Self::Unavailable( match message.is_empty() {
			true => "Unspecified error".to_string(),
			false => message,
		})
	}

}

/// Loads the module named by `descriptor`, finds the type implementing
/// [`ResourceFactoryProvider`] and instantiates it.
///
/// Expected failures never escape as errors or panics; they are returned as a
/// [`Diagnostic`]:
/// - `loader` is `None`
/// - the artifact id is empty
/// - the loader returns no module, fails, or panics
/// - no suitable type exists, or the named type does not implement the contract
/// - the type's constructor is missing, fails, or panics
///
/// `token` is only handed to the loader; the remaining stages are not cancellable.
pub async fn acquire_provider(
	descriptor: &LocatorDescriptor,
	loader: Option<&dyn ModuleLoader>,
	token: CancellationToken,
) -> Resolution {

	let resolution = acquire( descriptor, loader, token ).await ;
	if let Err( diagnostic ) = &resolution {
		tracing::warn!( artifact_id = descriptor.artifact_id(), %diagnostic, "Failed to acquire resource factory provider" );
	}
	resolution

}

async fn acquire(
	descriptor: &LocatorDescriptor,
	loader: Option<&dyn ModuleLoader>,
	token: CancellationToken,
) -> Resolution {

	let Some( loader ) = loader else { return Err( Diagnostic::MissingLoader )};

	let artifact_id = descriptor.artifact_id();
	if artifact_id.is_empty() { return Err( Diagnostic::MissingArtifactId )}

	tracing::debug!( artifact_id, version = descriptor.version(), path = descriptor.in_artifact_path(), "Loading provider module" );
	let module = AssertUnwindSafe( loader.load( ModuleRequest::from( descriptor ), token ))
		.catch_unwind()
		.await
		.pipe(| outcome | match outcome {
			Ok( Ok( Some( module ))) => Ok( module ),
			Ok( Ok( None )) => Err( Diagnostic::ModuleNotFound { artifact_id: artifact_id.to_string() }),
			Ok( Err( err )) => Err( Diagnostic::LoaderFailed { artifact_id: artifact_id.to_string(), message: err.to_string() }),
			Err( payload ) => Err( Diagnostic::LoaderFailed { artifact_id: artifact_id.to_string(), message: panic_message( &*payload ) }),
		})?;

	tracing::debug!( %module, type_name = descriptor.type_name(), "Resolving provider type" );
	let provider_type = resolve_type( &module, provider_contract(), descriptor.type_name() )?;

	tracing::debug!( %module, provider_type = %provider_type.identity(), "Instantiating provider" );
	Ok( instantiate( &module, provider_type )? )

}

/// Acquires a provider and binds it with the parameters from `parameter_source`,
/// returning a factory for resources of type `R`.
///
/// # Errors
/// - [`FactoryError::Unavailable`] with the diagnostic text if the provider could not be
/// 	acquired ( see [`acquire_provider`] )
/// - [`FactoryError::Binding`] if the parameters could not be produced or the provider
/// 	rejected them
/// - [`FactoryError::ResourceTypeMismatch`] if the provider's factory does not create `R`
pub async fn create_typed_factory<R: 'static>(
	descriptor: &LocatorDescriptor,
	loader: Option<&dyn ModuleLoader>,
	parameter_source: &dyn ParameterSource,
	token: CancellationToken,
) -> Result<Arc<dyn ResourceFactory<R>>, FactoryError> {

	let provider = acquire_provider( descriptor, loader, token ).await
		.map_err(| diagnostic | FactoryError::unavailable( &diagnostic ))?;

	let shape = provider.parameter_shape();
	tracing::debug!( artifact_id = descriptor.artifact_id(), parameter_type = shape.type_name(), "Binding creation parameters" );
	let parameters = parameter_source.creation_parameters( provider.as_ref() ).await?;

	let factory = provider.bind_creation_parameters( parameters )?
		.into_typed::<R>()
		.map_err(| bound | FactoryError::ResourceTypeMismatch {
			expected: std::any::type_name::<R>(),
			actual: bound.resource_type(),
		})?;

	tracing::info!( artifact_id = descriptor.artifact_id(), resource_type = std::any::type_name::<R>(), "Resource factory bound" );
	Ok( factory )

}

/// Like [`create_typed_factory`], reading the creation parameters from the
/// configuration source of `descriptor` unless `parameter_source` is given.
///
/// # Errors
/// See [`create_typed_factory`]. Without a `parameter_source`, a descriptor with neither
/// configuration contents nor a configuration file path fails with
/// [`BindError::MissingConfigurationSource`].
pub async fn create_factory_using_configuration<R: 'static>(
	descriptor: &FileBasedLocatorDescriptor,
	loader: Option<&dyn ModuleLoader>,
	token: CancellationToken,
	parameter_source: Option<&dyn ParameterSource>,
) -> Result<Arc<dyn ResourceFactory<R>>, FactoryError> {

	let default_source = ConfigurationFileSource::from_descriptor( descriptor );
	create_typed_factory( descriptor.locator(), loader, parameter_source.unwrap_or( &default_source ), token ).await

}
