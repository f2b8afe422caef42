use factory_link::{ acquire_provider, create_factory_using_configuration, Diagnostic, FileBasedLocatorDescriptor };
use tokio_util::sync::CancellationToken ;
use crate::fixtures::echo_catalog ;

#[tokio::test]
async fn descriptor_from_json() {

	let descriptor: FileBasedLocatorDescriptor = serde_json::from_str( r#"{
		"artifact_id": "acme-pool",
		"version": "",
		"type_name": "acme.pool.EchoProvider",
		"config_file_contents": "{ \"prefix\": \"json-\" }"
	}"# ).expect( "Failed to parse descriptor" );

	assert_eq!( descriptor.locator().version(), None );
	assert_eq!( descriptor.locator().in_artifact_path(), None );
	assert_eq!( descriptor.config_file_path(), None );

	let catalog = echo_catalog();
	let factory = match create_factory_using_configuration::<String>( &descriptor, Some( &catalog ), CancellationToken::new(), None ).await {
		Ok( factory ) => factory,
		Err( err ) => panic!( "{}", err ),
	};

	match factory.create_resource( CancellationToken::new() ).await {
		Ok( resource ) => assert_eq!( resource, "json-resource" ),
		Err( err ) => panic!( "{}", err ),
	}

}

#[test]
fn descriptor_to_json_omits_absent_fields() {

	let descriptor = FileBasedLocatorDescriptor::new( factory_link::LocatorDescriptor::new( "acme-pool" ))
		.with_config_file_contents( "{}" );

	let value = serde_json::to_value( &descriptor ).expect( "Failed to serialize descriptor" );
	assert_eq!( value, serde_json::json!({ "artifact_id": "acme-pool", "config_file_contents": "{}" }));

}

#[tokio::test]
async fn descriptor_from_json_without_artifact_id() {

	let descriptor: FileBasedLocatorDescriptor = serde_json::from_str( r#"{ "config_file_contents": "{}" }"# )
		.expect( "Failed to parse descriptor" );

	assert_eq!( descriptor.locator().artifact_id(), "" );

	let catalog = echo_catalog();
	match acquire_provider( descriptor.locator(), Some( &catalog ), CancellationToken::new() ).await {
		Err( Diagnostic::MissingArtifactId ) => {},
		Err( diagnostic ) => panic!( "Unexpected diagnostic: {}", diagnostic ),
		Ok( _ ) => panic!( "Expected failure" ),
	}

}
