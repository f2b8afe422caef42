//! The capability contract every loadable provider implements.
//!
//! A [`ResourceFactoryProvider`] is what the pipeline instantiates out of a loaded
//! module. It declares the shape of the creation parameters it needs through a
//! [`ParameterShape`] and, once given parameters of that shape, produces a
//! [`BoundFactory`] that the caller unwraps into a [`ResourceFactory`] for a
//! concrete resource type.

use std::any::Any ;
use std::sync::Arc ;
use async_trait::async_trait ;
use once_cell::sync::Lazy ;
use serde::de::DeserializeOwned ;
use tokio_util::sync::CancellationToken ;

use crate::{ BindError, BoxError, ModuleIdentity, TypeIdentity };



/// Namespace the provider contract is declared in.
pub const CONTRACT_NAMESPACE: &str = "factory_link" ;

/// Simple name of the provider contract.
pub const CONTRACT_NAME: &str = "ResourceFactoryProvider" ;

/// Token of the key the contract module is signed with.
///
/// Provider modules declaring their own copy of the contract must carry this exact token
/// for the copy to be recognised.
pub const CONTRACT_SIGNING_TOKEN: [u8; 8] = [ 0x7a, 0x3d, 0x51, 0x0c, 0xe4, 0x92, 0x6b, 0x1f ];

static PROVIDER_CONTRACT: Lazy<TypeIdentity> = Lazy::new(|| TypeIdentity::new(
	CONTRACT_NAMESPACE,
	CONTRACT_NAME,
	ModuleIdentity::new( env!( "CARGO_PKG_NAME" ), env!( "CARGO_PKG_VERSION" ), CONTRACT_SIGNING_TOKEN ),
));

/// Identity of [`ResourceFactoryProvider`] as the host sees it.
///
/// Candidate types are checked against this identity. Provider modules compiled against
/// an older or newer version of this crate still match because the comparison ignores
/// the module version.
pub fn provider_contract() -> &'static TypeIdentity { &PROVIDER_CONTRACT }

/// A pluggable implementation producing resource factories.
///
/// Implementations are registered in a [`Module`]( crate::Module ) with a parameterless
/// constructor and are instantiated by the pipeline; the caller owns the instance from
/// then on.
pub trait ResourceFactoryProvider: Send + Sync {

	/// The parameter type this provider expects to be bound with.
	fn parameter_shape( &self ) -> ParameterShape ;

	/// Binds the creation parameters and returns the resulting factory.
	///
	/// # Errors
	/// Implementations fail when the parameters are not of the declared shape or are
	/// otherwise unusable.
	fn bind_creation_parameters( &self, parameters: CreationParameters ) -> Result<BoundFactory, BindError> ;

}

/// Creates resources of type `R`. Consumed by the pooling engine.
#[async_trait]
pub trait ResourceFactory<R>: Send + Sync {

	/// Creates a new resource.
	///
	/// # Errors
	/// Returns an error if the resource could not be created or `token` was cancelled.
	async fn create_resource( &self, token: CancellationToken ) -> Result<R, BoxError> ;

}

/// The creation parameter type a provider declares, together with a way to produce a
/// value of it from structured configuration data.
#[derive( Clone, Copy )]
pub struct ParameterShape {
	type_name: &'static str,
	deserialize: fn( serde_json::Value ) -> Result<CreationParameters, serde_json::Error>,
}

impl ParameterShape {

	/// Shape of a parameter of type `T`.
	pub fn of<T: DeserializeOwned + Send + 'static>() -> Self {
		Self {
			type_name: std::any::type_name::<T>(),
			deserialize: | value | serde_json::from_value::<T>( value ).map( CreationParameters::new ),
		}
	}

	/// Name of the parameter type.
	#[inline] pub fn type_name( &self ) -> &'static str { self.type_name }

	/// Deserializes structured data into a value of the parameter type.
	///
	/// # Errors
	/// Returns an error if `value` does not have the shape of the parameter type.
	pub fn deserialize( &self, value: serde_json::Value ) -> Result<CreationParameters, serde_json::Error> {
		( self.deserialize )( value )
	}

}

impl std::fmt::Debug for ParameterShape {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ParameterShape" )
			.field( "type_name", &self.type_name )
			.finish_non_exhaustive()
	}
}

/// A type-erased creation parameter value.
pub struct CreationParameters {
	value: Box<dyn Any + Send>,
	type_name: &'static str,
}

impl CreationParameters {

	/// Wraps a parameter value.
	pub fn new<T: Any + Send>( value: T ) -> Self {
		Self { value: Box::new( value ), type_name: std::any::type_name::<T>() }
	}

	/// Name of the wrapped value's type.
	#[inline] pub fn type_name( &self ) -> &'static str { self.type_name }

	/// Returns `true` if the wrapped value is a `T`.
	#[inline] pub fn is<T: Any>( &self ) -> bool { self.value.is::<T>() }

	/// Takes the wrapped value out as a `T`.
	///
	/// # Errors
	/// Gives the parameters back unchanged if the wrapped value is not a `T`.
	pub fn downcast<T: Any>( self ) -> Result<T, Self> {
		let Self { value, type_name } = self ;
		value.downcast::<T>()
			.map(| value | *value )
			.map_err(| value | Self { value, type_name })
	}

}

impl std::fmt::Debug for CreationParameters {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "CreationParameters" )
			.field( "type_name", &self.type_name )
			.finish_non_exhaustive()
	}
}

/// A factory returned by a provider, erased over the resource type it creates.
///
/// Use [`into_typed`]( Self::into_typed ) to get the [`ResourceFactory`] back.
pub struct BoundFactory {
	factory: Box<dyn Any + Send + Sync>,
	resource_type: &'static str,
}

impl BoundFactory {

	/// Erases a factory creating resources of type `R`.
	pub fn new<R, F>( factory: F ) -> Self
	where
		R: 'static,
		F: ResourceFactory<R> + 'static,
	{
		let factory: Arc<dyn ResourceFactory<R>> = Arc::new( factory );
		Self { factory: Box::new( factory ), resource_type: std::any::type_name::<R>() }
	}

	/// Name of the resource type the factory creates.
	#[inline] pub fn resource_type( &self ) -> &'static str { self.resource_type }

	/// Recovers the factory for resources of type `R`.
	///
	/// # Errors
	/// Gives the factory back unchanged if it creates resources of another type.
	pub fn into_typed<R: 'static>( self ) -> Result<Arc<dyn ResourceFactory<R>>, Self> {
		let Self { factory, resource_type } = self ;
		factory.downcast::<Arc<dyn ResourceFactory<R>>>()
			.map(| factory | *factory )
			.map_err(| factory | Self { factory, resource_type })
	}

}

impl std::fmt::Debug for BoundFactory {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "BoundFactory" )
			.field( "resource_type", &self.resource_type )
			.finish_non_exhaustive()
	}
}
