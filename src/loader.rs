//! The module loader callback.
//!
//! Fetching artifacts, negotiating versions and caching loaded modules is the loader's
//! business. The pipeline only calls it once per resolution with the artifact
//! coordinates and the caller's cancellation token.

use std::future::Future ;
use std::sync::Arc ;
use async_trait::async_trait ;
use tokio_util::sync::CancellationToken ;

use crate::{ BoxError, LocatorDescriptor, Module };



/// The artifact coordinates passed to a [`ModuleLoader`].
#[derive( Clone, Debug, PartialEq, Eq, Hash )]
pub struct ModuleRequest {
	artifact_id: String,
	version: Option<String>,
	in_artifact_path: Option<String>,
}

impl ModuleRequest {

	pub fn new(
		artifact_id: impl Into<String>,
		version: Option<String>,
		in_artifact_path: Option<String>,
	) -> Self {
		Self { artifact_id: artifact_id.into(), version, in_artifact_path }
	}

	#[inline] pub fn artifact_id( &self ) -> &str { &self.artifact_id }

	/// Requested version; `None` asks for the newest available one.
	#[inline] pub fn version( &self ) -> Option<&str> { self.version.as_deref() }

	/// Requested module inside the artifact, if the artifact holds more than one.
	#[inline] pub fn in_artifact_path( &self ) -> Option<&str> { self.in_artifact_path.as_deref() }

}

impl From<&LocatorDescriptor> for ModuleRequest {
	fn from( descriptor: &LocatorDescriptor ) -> Self {
		Self::new(
			descriptor.artifact_id(),
			descriptor.version().map( str::to_string ),
			descriptor.in_artifact_path().map( str::to_string ),
		)
	}
}

/// Loads the module held by an artifact.
///
/// Returning `Ok( None )` is the expected way to report that the artifact or module
/// does not exist. Errors are tolerated too: the pipeline turns them into a
/// [`Diagnostic`]( crate::Diagnostic ) instead of propagating them.
///
/// Any async closure taking a [`ModuleRequest`] and a [`CancellationToken`] is a loader:
///
/// ```
/// use std::sync::Arc ;
/// use factory_link::{ BoxError, Module, ModuleLoader, ModuleRequest };
/// use tokio_util::sync::CancellationToken ;
///
/// fn assert_loader( _: &dyn ModuleLoader ) {}
///
/// let loader = | _request: ModuleRequest, _token: CancellationToken | async {
/// 	Ok::<Option<Arc<Module>>, BoxError>( None )
/// };
/// assert_loader( &loader );
/// ```
#[async_trait]
pub trait ModuleLoader: Send + Sync {

	/// Loads the module described by `request`. Implementations should stop early once
	/// `token` is cancelled.
	///
	/// # Errors
	/// Implementations may fail for any reason; the failure is reported to the caller as
	/// a diagnostic.
	async fn load( &self, request: ModuleRequest, token: CancellationToken ) -> Result<Option<Arc<Module>>, BoxError> ;

}

#[async_trait]
impl<F, Fut> ModuleLoader for F
where
	F: Fn( ModuleRequest, CancellationToken ) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Option<Arc<Module>>, BoxError>> + Send + 'static,
{
	async fn load( &self, request: ModuleRequest, token: CancellationToken ) -> Result<Option<Arc<Module>>, BoxError> {
		self( request, token ).await
	}
}
