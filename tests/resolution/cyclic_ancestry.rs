use factory_link::{ Module, TypeDescriptor, TypeKind, provider_contract, satisfies_contract };
use crate::fixtures::{ ARTIFACT_ID, provider_module_identity, type_in };

#[test]
fn cyclic_ancestry_terminates() {

	let identity = provider_module_identity( ARTIFACT_ID );
	let module = Module::builder( identity.clone() )
		.declare( TypeDescriptor::concrete( type_in( &identity, "Left" )).with_base_type( type_in( &identity, "Right" )))
		.declare( TypeDescriptor::new( type_in( &identity, "Right" ), TypeKind::Abstract )
			.with_base_type( type_in( &identity, "Left" ))
			.implementing( type_in( &identity, "Right" )))
		.build();

	let Some( left ) = module.get_type( "acme.pool.Left" ) else { panic!( "Left is not declared" )};
	assert!( !satisfies_contract( &module, left, provider_contract() ));

}

#[test]
fn cyclic_ancestry_still_finds_contract() {

	let identity = provider_module_identity( ARTIFACT_ID );
	let module = Module::builder( identity.clone() )
		.declare( TypeDescriptor::concrete( type_in( &identity, "Pooled" )).implementing( type_in( &identity, "Recycled" )))
		.declare( TypeDescriptor::contract( type_in( &identity, "Recycled" )).implementing( type_in( &identity, "Reusable" )))
		.declare( TypeDescriptor::contract( type_in( &identity, "Reusable" ))
			.implementing( type_in( &identity, "Recycled" ))
			.implementing( provider_contract().clone() ))
		.build();

	let Some( pooled ) = module.get_type( "acme.pool.Pooled" ) else { panic!( "Pooled is not declared" )};
	assert!( satisfies_contract( &module, pooled, provider_contract() ));

}
