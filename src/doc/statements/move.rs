/*!
# `move <distance>`

## Purpose
Reserved for driving a set distance.

## Remarks
The distance is converted to wheel encoder counts and the direction is
taken from its sign, but the motors are not driven yet.
Use `motors` and `wait` instead.

*/
