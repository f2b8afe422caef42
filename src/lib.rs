//! Runtime resolution of resource factory providers.
//!
//! A resource factory provider is a pluggable implementation shipped in a separately
//! distributed, versioned artifact. `factory_link` loads such an artifact through a
//! caller-supplied loader, finds the type within it that implements the
//! [`ResourceFactoryProvider`] contract, instantiates it and binds caller-supplied or
//! file-based configuration into the creation parameters the provider asks for. The
//! caller ends up with a ready-to-use [`ResourceFactory`] without knowing the concrete
//! provider type at compile time.
//!
//! # Core Concepts
//!
//! - [`LocatorDescriptor`]: What to load: an artifact id, and optionally a version, a
//! 	path inside the artifact and the name of the provider type.
//!
//! - [`ModuleLoader`]: The caller's callback that turns artifact coordinates into a
//! 	[`Module`]. Repository access, version negotiation and caching all live there.
//!
//! - [`Module`]: The loaded representation of an artifact. It describes the types it
//! 	declares ( [`TypeDescriptor`] ) and holds a parameterless constructor for each
//! 	constructible one.
//!
//! - [`TypeIdentity`]: Namespace, name and declaring [`ModuleIdentity`] of a type. The
//! 	contract is matched *version-agnostically*: a provider built against another
//! 	version of this crate still declares a compatible copy of the contract, as long as
//! 	the declaring module's name and signing token are the same.
//!
//! - [`Diagnostic`]: An expected failure ( missing artifact, missing type, contract
//! 	mismatch, ... ) reported as a value rather than an error.
//!
//! - [`ParameterSource`]: Produces the creation parameters for a resolved provider.
//! 	[`ConfigurationFileSource`] reads them from inline JSON or a JSON file.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc ;
//! use async_trait::async_trait ;
//! use serde::Deserialize ;
//! use tokio_util::sync::CancellationToken ;
//! use factory_link::{
//! 	BindError, BoundFactory, BoxError, CreationParameters, FileBasedLocatorDescriptor,
//! 	LocatorDescriptor, Module, ModuleIdentity, ModuleRequest, ParameterShape,
//! 	ResourceFactory, ResourceFactoryProvider, TypeDescriptor, TypeIdentity,
//! 	create_factory_using_configuration, provider_contract,
//! };
//!
//! #[derive( Deserialize )]
//! struct GreeterParameters { greeting: String }
//!
//! struct Greeter { greeting: String }
//!
//! #[async_trait]
//! impl ResourceFactory<String> for Greeter {
//! 	async fn create_resource( &self, _token: CancellationToken ) -> Result<String, BoxError> {
//! 		Ok( self.greeting.clone() )
//! 	}
//! }
//!
//! #[derive( Default )]
//! struct GreeterProvider ;
//!
//! impl ResourceFactoryProvider for GreeterProvider {
//! 	fn parameter_shape( &self ) -> ParameterShape { ParameterShape::of::<GreeterParameters>() }
//! 	fn bind_creation_parameters( &self, parameters: CreationParameters ) -> Result<BoundFactory, BindError> {
//! 		let GreeterParameters { greeting } = parameters.downcast::<GreeterParameters>()
//! 			.map_err(| parameters | BindError::UnexpectedParameters {
//! 				expected: self.parameter_shape().type_name(),
//! 				actual: parameters.type_name(),
//! 			})?;
//! 		Ok( BoundFactory::new::<String, _>( Greeter { greeting }))
//! 	}
//! }
//!
//! # #[tokio::main( flavor = "current_thread" )]
//! # async fn main() -> Result<(), BoxError> {
//! // A loader would normally fetch and load the artifact; here the module is built in place.
//! let loader = | _request: ModuleRequest, _token: CancellationToken | async {
//! 	let module_identity = ModuleIdentity::unsigned( "greeter", "1.0.0" );
//! 	let module = Module::builder( module_identity.clone() )
//! 		.declare_default::<GreeterProvider>(
//! 			TypeDescriptor::concrete( TypeIdentity::new( "greeter", "GreeterProvider", module_identity ))
//! 				.implementing( provider_contract().clone() ),
//! 		)
//! 		.build();
//! 	Ok::<_, BoxError>( Some( Arc::new( module )))
//! };
//!
//! let descriptor = FileBasedLocatorDescriptor::new( LocatorDescriptor::new( "greeter" ))
//! 	.with_config_file_contents( r#"{ "greeting": "hello" }"# );
//!
//! let factory = create_factory_using_configuration::<String>(
//! 	&descriptor,
//! 	Some( &loader ),
//! 	CancellationToken::new(),
//! 	None,
//! ).await?;
//!
//! assert_eq!( factory.create_resource( CancellationToken::new() ).await?, "hello" );
//! # Ok(())
//! # }
//! ```
//!
//! # Failure Handling
//!
//! [`acquire_provider`] never fails with an error for conditions that depend on the
//! artifact or the configuration: it returns a [`Diagnostic`] instead. Errors and
//! panics raised by the loader or by a constructor are converted into diagnostics as
//! well. [`create_typed_factory`] and [`create_factory_using_configuration`] promise a
//! usable factory, so they turn diagnostics into [`FactoryError::Unavailable`].
//!
//! Forgetting to provide any configuration source to the default parameter source is a
//! caller mistake and is reported as [`BindError::MissingConfigurationSource`]
//! ( see [`FactoryError::is_defect`] ).

mod identity ;
mod module ;
mod locator ;
mod loader ;
mod resolver ;
mod instantiate ;
mod provider ;
mod binder ;
mod diagnostic ;
mod pipeline ;

/// A boxed error as returned by loaders, constructors and resource factories.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub use identity::{ ModuleIdentity, TypeIdentity };
pub use module::{ Module, ModuleBuilder, TypeDescriptor, TypeKind, Visibility, Constructor };
pub use locator::{ LocatorDescriptor, FileBasedLocatorDescriptor };
pub use loader::{ ModuleLoader, ModuleRequest };
pub use resolver::{ ResolveError, resolve_type, satisfies_contract };
pub use instantiate::{ InstantiationError, instantiate };
pub use provider::{
	ResourceFactoryProvider, ResourceFactory, ParameterShape, CreationParameters, BoundFactory,
	provider_contract, CONTRACT_NAMESPACE, CONTRACT_NAME, CONTRACT_SIGNING_TOKEN,
};
pub use binder::{ ParameterSource, ConfigurationFileSource, BindError };
pub use diagnostic::Diagnostic ;
pub use pipeline::{
	Resolution, FactoryError,
	acquire_provider, create_typed_factory, create_factory_using_configuration,
};
