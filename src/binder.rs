//! Producing the creation parameters a provider is bound with.
//!
//! The caller decides where parameters come from by supplying a [`ParameterSource`].
//! The default source, [`ConfigurationFileSource`], reads JSON either inline or from a
//! file and deserializes it into whatever type the provider declares through its
//! [`ParameterShape`]( crate::ParameterShape ).

use std::path::PathBuf ;
use async_trait::async_trait ;
use thiserror::Error ;

use crate::{ BoxError, CreationParameters, FileBasedLocatorDescriptor, ResourceFactoryProvider };



/// Errors raised while producing or binding creation parameters.
#[derive( Debug, Error )]
pub enum BindError {
	/// Neither inline configuration contents nor a configuration file path were given.
	///
	/// This is a caller misconfiguration rather than an operational failure.
	#[error( "Configuration file path was not provided." )] MissingConfigurationSource,
	/// The configuration file could not be resolved or read.
	#[error( "Failed to read configuration file \"{}\": {source}", .path.display() )]
	Io { path: PathBuf, #[source] source: std::io::Error },
	/// The configuration is not valid JSON.
	#[error( "Configuration is not valid structured data: {0}" )] Parse( #[source] serde_json::Error ),
	/// The configuration does not have the shape of the provider's parameter type.
	#[error( "Configuration cannot be bound to \"{type_name}\": {source}" )]
	Deserialize { type_name: &'static str, #[source] source: serde_json::Error },
	/// The provider was handed parameters of a type it does not accept.
	#[error( "Expected creation parameters of type \"{expected}\", got \"{actual}\"" )]
	UnexpectedParameters { expected: &'static str, actual: &'static str },
	/// Any other failure raised by a parameter source or a provider.
	#[error( "{0}" )] Other( BoxError ),
}

/// Supplies the creation parameters for a resolved provider.
///
/// The provider is passed in so that the value can depend on what it declares, most
/// notably its [`parameter_shape`]( ResourceFactoryProvider::parameter_shape ).
///
/// Plain closures are parameter sources:
///
/// ```
/// use factory_link::{ BindError, CreationParameters, ParameterSource, ResourceFactoryProvider };
///
/// fn assert_source( _: &dyn ParameterSource ) {}
///
/// let source = | _provider: &dyn ResourceFactoryProvider | Ok::<_, BindError>( CreationParameters::new( 42_u32 ));
/// assert_source( &source );
/// ```
#[async_trait]
pub trait ParameterSource: Send + Sync {

	/// Produces the parameters `provider` will be bound with.
	///
	/// # Errors
	/// Returns a [`BindError`] if the parameters cannot be produced.
	async fn creation_parameters( &self, provider: &dyn ResourceFactoryProvider ) -> Result<CreationParameters, BindError> ;

}

#[async_trait]
impl<F> ParameterSource for F
where
	F: Fn( &dyn ResourceFactoryProvider ) -> Result<CreationParameters, BindError> + Send + Sync,
{
	async fn creation_parameters( &self, provider: &dyn ResourceFactoryProvider ) -> Result<CreationParameters, BindError> {
		self( provider )
	}
}

/// Reads creation parameters from inline JSON or from a JSON file.
///
/// Inline contents win over the file path; the file is never touched when both are set.
/// Reading a file offloads the blocking I/O to tokio, so it has to run inside a tokio
/// runtime.
#[derive( Clone, Debug, Default, PartialEq, Eq )]
pub struct ConfigurationFileSource {
	contents: Option<String>,
	path: Option<PathBuf>,
}

impl ConfigurationFileSource {

	/// Reads the configuration from `contents`.
	pub fn inline( contents: impl Into<String> ) -> Self {
		Self { contents: Some( contents.into() ), path: None }
	}

	/// Reads the configuration from the file at `path`.
	pub fn file( path: impl Into<PathBuf> ) -> Self {
		Self { contents: None, path: Some( path.into() ) }
	}

	/// Uses whichever configuration source `descriptor` specifies.
	pub fn from_descriptor( descriptor: &FileBasedLocatorDescriptor ) -> Self {
		Self {
			contents: descriptor.config_file_contents().map( str::to_string ),
			path: descriptor.config_file_path().map( PathBuf::from ),
		}
	}

	/// Reads and parses the configuration.
	///
	/// # Errors
	/// Returns [`BindError::MissingConfigurationSource`] when no source is set, and
	/// [`BindError::Io`] or [`BindError::Parse`] when the configuration can't be read.
	pub async fn read_structured( &self ) -> Result<serde_json::Value, BindError> {

		let text = match ( self.contents.as_deref().filter(| contents | !contents.is_empty()), self.path.as_ref()) {
			( Some( contents ), _ ) => {
				tracing::debug!( "Reading inline configuration" );
				contents.to_string()
			},
			( None, Some( path )) if !path.as_os_str().is_empty() => {
				let path = std::path::absolute( path ).map_err(| source | BindError::Io { path: path.clone(), source })?;
				tracing::debug!( path = %path.display(), "Reading configuration file" );
				tokio::fs::read_to_string( path.clone() ).await.map_err(| source | BindError::Io { path, source })?
			},
			_ => return Err( BindError::MissingConfigurationSource ),
		};

		serde_json::from_str( &text ).map_err( BindError::Parse )

	}

}

#[async_trait]
impl ParameterSource for ConfigurationFileSource {
	async fn creation_parameters( &self, provider: &dyn ResourceFactoryProvider ) -> Result<CreationParameters, BindError> {
		let shape = provider.parameter_shape();
		let value = self.read_structured().await?;
		shape.deserialize( value )
			.map_err(| source | BindError::Deserialize { type_name: shape.type_name(), source })
	}
}
