use factory_link::{
	acquire_provider, Diagnostic, LocatorDescriptor, Module, ResolveError, TypeDescriptor,
	provider_contract,
};
use tokio_util::sync::CancellationToken ;
use crate::fixtures::{ EchoProvider, ModuleCatalog, ARTIFACT_ID, full_name, provider_module_identity, type_in };

fn unrelated_catalog( with_provider: bool ) -> ModuleCatalog {
	let identity = provider_module_identity( ARTIFACT_ID );
	let builder = Module::builder( identity.clone() )
		.declare_default::<EchoProvider>( TypeDescriptor::concrete( type_in( &identity, "Unrelated" )));
	let module = match with_provider {
		true => builder.declare_default::<EchoProvider>(
			TypeDescriptor::concrete( type_in( &identity, "EchoProvider" )).implementing( provider_contract().clone() )
		),
		false => builder,
	}.build();
	ModuleCatalog::new().with_module( ARTIFACT_ID, "1.0.0", module )
}

#[tokio::test]
async fn acquire_provider_named_type_without_contract() {

	let catalog = unrelated_catalog( true );
	let descriptor = LocatorDescriptor::new( ARTIFACT_ID ).with_type_name( full_name( "Unrelated" ));

	match acquire_provider( &descriptor, Some( &catalog ), CancellationToken::new() ).await {
		Err( diagnostic @ Diagnostic::Resolution( ResolveError::MissingContract { .. } )) => {
			let message = diagnostic.to_string();
			assert!( message.contains( "acme.pool.Unrelated" ), "{}", message );
			assert!( message.contains( "factory_link.ResourceFactoryProvider" ), "{}", message );
		},
		Err( diagnostic ) => panic!( "Unexpected diagnostic: {}", diagnostic ),
		Ok( _ ) => panic!( "Expected failure" ),
	}

}

#[tokio::test]
async fn acquire_provider_no_candidate() {

	let catalog = unrelated_catalog( false );
	let descriptor = LocatorDescriptor::new( ARTIFACT_ID );

	match acquire_provider( &descriptor, Some( &catalog ), CancellationToken::new() ).await {
		Err( diagnostic @ Diagnostic::Resolution( ResolveError::NoCandidate { .. } )) => {
			let message = diagnostic.to_string();
			assert!( message.contains( "\"type_name\"" ), "{}", message );
			assert!( message.contains( ARTIFACT_ID ), "{}", message );
		},
		Err( diagnostic ) => panic!( "Unexpected diagnostic: {}", diagnostic ),
		Ok( _ ) => panic!( "Expected failure" ),
	}

}
