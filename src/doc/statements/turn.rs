/*!
# `turn [<angle>]`

## Purpose
Reserved for turning on the spot. It is accepted and does nothing.

*/
