use std::sync::Arc ;
use factory_link::{ create_typed_factory, ConfigurationFileSource, LocatorDescriptor };
use tokio_util::sync::CancellationToken ;
use crate::fixtures::{ ARTIFACT_ID, echo_catalog };

#[tokio::test( flavor = "multi_thread", worker_threads = 4 )]
async fn concurrent_runs_are_independent() {

	let catalog = Arc::new( echo_catalog() );

	let runs = ( 0..8 ).map(| index | {
		let catalog = Arc::clone( &catalog );
		tokio::spawn( async move {
			let descriptor = LocatorDescriptor::new( ARTIFACT_ID );
			let source = ConfigurationFileSource::inline( format!( r#"{{ "prefix": "run-{}-" }}"#, index ));
			let factory = create_typed_factory::<String>( &descriptor, Some( catalog.as_ref() ), &source, CancellationToken::new() ).await
				.map_err(| err | err.to_string() )?;
			factory.create_resource( CancellationToken::new() ).await.map_err(| err | err.to_string() )
		})
	}).collect::<Vec<_>>();

	for ( index, run ) in runs.into_iter().enumerate() {
		match run.await {
			Ok( Ok( resource )) => assert_eq!( resource, format!( "run-{}-resource", index )),
			Ok( Err( err )) => panic!( "{}", err ),
			Err( err ) => panic!( "Task failed: {}", err ),
		}
	}

}
